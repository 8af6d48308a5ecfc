use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::use_cases::get_site_content::GetContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Editor view of the three sections, same resolution as the public route
/// but behind the admin gate.
#[get("/api/admin/content")]
pub async fn get_admin_content_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_site_content_use_case.execute().await {
        Ok(content) => ApiResponse::success(content),
        Err(GetContentError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to load site content for admin");
            ApiResponse::internal_error()
        }
    }
}
