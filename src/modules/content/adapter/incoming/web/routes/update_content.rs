use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::use_cases::save_site_content::SaveContentError;
use crate::content::domain::entities::SiteContent;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use tracing::{error, info};

/// Saves all three sections. The payload is the full typed document;
/// unknown keys are rejected by deserialization before this handler runs.
#[put("/api/admin/content")]
pub async fn update_content_handler(
    session: AdminSession,
    body: web::Json<SiteContent>,
    data: web::Data<AppState>,
) -> impl Responder {
    let content = body.into_inner();

    info!(admin_id = %session.admin_id, "Saving site content");

    match data.save_site_content_use_case.execute(content).await {
        Ok(()) => ApiResponse::success(serde_json::json!({ "message": "Content saved" })),
        Err(SaveContentError::SerializationError(section)) => {
            error!(section, "Section serialization failed");
            ApiResponse::internal_error()
        }
        Err(SaveContentError::RepositoryError {
            section,
            ref message,
        }) => {
            error!(section, error = %message, "Content save aborted");
            ApiResponse::internal_error()
        }
    }
}
