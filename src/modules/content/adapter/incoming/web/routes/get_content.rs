use crate::content::application::use_cases::get_site_content::GetContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Public landing-page content, stored overrides merged over defaults.
#[get("/api/content")]
pub async fn get_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_site_content_use_case.execute().await {
        Ok(content) => ApiResponse::success(content),
        Err(GetContentError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to load site content");
            ApiResponse::internal_error()
        }
    }
}
