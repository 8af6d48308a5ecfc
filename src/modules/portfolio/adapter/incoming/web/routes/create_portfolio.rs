use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::portfolio::application::use_cases::create_portfolio::{
    CreatePortfolioError, PortfolioDraft, PortfolioDraftError,
};
use crate::portfolio::domain::entities::PortfolioCategory;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

/// Portfolio payload from the admin console, shared by create and update.
#[derive(Deserialize)]
pub struct PortfolioDto {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub category: PortfolioCategory,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub project_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_featured: bool,
}

impl PortfolioDto {
    pub fn into_draft(self) -> Result<PortfolioDraft, PortfolioDraftError> {
        PortfolioDraft::new(
            &self.title,
            &self.description,
            &self.image_url,
            self.category,
            &self.client_name,
            self.project_date,
            self.is_featured,
        )
    }
}

#[post("/api/admin/portfolio")]
pub async fn create_portfolio_handler(
    session: AdminSession,
    body: web::Json<PortfolioDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let draft = match body.into_inner().into_draft() {
        Ok(draft) => draft,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.create_portfolio_use_case.execute(draft).await {
        Ok(created) => {
            info!(admin_id = %session.admin_id, portfolio_id = %created.id, "Portfolio item created");
            ApiResponse::created(created)
        }
        Err(CreatePortfolioError::RepositoryError(ref e)) => {
            error!(error = %e, "Portfolio create failed");
            ApiResponse::internal_error()
        }
    }
}
