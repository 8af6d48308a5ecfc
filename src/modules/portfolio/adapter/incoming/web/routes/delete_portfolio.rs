use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::portfolio::application::use_cases::delete_portfolio::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

#[delete("/api/admin/portfolio/{id}")]
pub async fn delete_portfolio_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.delete_portfolio_use_case.execute(id).await {
        Ok(()) => {
            info!(admin_id = %session.admin_id, portfolio_id = %id, "Portfolio item deleted");
            ApiResponse::no_content()
        }
        Err(DeletePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio item not found")
        }
        Err(DeletePortfolioError::RepositoryError(ref e)) => {
            error!(error = %e, portfolio_id = %id, "Portfolio delete failed");
            ApiResponse::internal_error()
        }
    }
}
