use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};
use serde::Serialize;

#[derive(Serialize)]
pub struct SessionInfo {
    admin_id: String,
}

/// Returns the identity behind the presented access token. The console
/// calls this on load to decide whether to show the login screen.
#[get("/api/auth/session")]
pub async fn get_session_handler(session: AdminSession) -> impl Responder {
    ApiResponse::success(SessionInfo {
        admin_id: session.admin_id.to_string(),
    })
}
