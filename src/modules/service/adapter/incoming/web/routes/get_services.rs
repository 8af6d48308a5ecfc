use crate::service::application::use_cases::get_services::GetServicesError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

#[get("/api/services")]
pub async fn get_services_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_services_use_case.execute().await {
        Ok(services) => ApiResponse::success(services),
        Err(GetServicesError::QueryError(ref e)) => {
            error!(error = %e, "Failed to load services");
            ApiResponse::internal_error()
        }
    }
}
