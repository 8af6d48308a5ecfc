use super::create_portfolio::PortfolioDto;
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::portfolio::application::use_cases::update_portfolio::UpdatePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

#[put("/api/admin/portfolio/{id}")]
pub async fn update_portfolio_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    body: web::Json<PortfolioDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    let draft = match body.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.update_portfolio_use_case.execute(id, draft).await {
        Ok(updated) => {
            info!(admin_id = %session.admin_id, portfolio_id = %id, "Portfolio item updated");
            ApiResponse::success(updated)
        }
        Err(UpdatePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio item not found")
        }
        Err(UpdatePortfolioError::RepositoryError(ref e)) => {
            error!(error = %e, portfolio_id = %id, "Portfolio update failed");
            ApiResponse::internal_error()
        }
    }
}
