use crate::portfolio::application::use_cases::get_portfolios::GetPortfoliosError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Newest-first; category filtering happens client-side.
#[get("/api/portfolio")]
pub async fn get_portfolios_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_portfolios_use_case.execute().await {
        Ok(items) => ApiResponse::success(items),
        Err(GetPortfoliosError::QueryError(ref e)) => {
            error!(error = %e, "Failed to load portfolio");
            ApiResponse::internal_error()
        }
    }
}
