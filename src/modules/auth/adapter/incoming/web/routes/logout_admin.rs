use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::shared::api::ApiResponse;
use actix_web::{post, Responder};
use tracing::info;

/// Tokens are short-lived and not tracked server-side, so logout only
/// acknowledges; the client discards its token.
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(session: AdminSession) -> impl Responder {
    info!(admin_id = %session.admin_id, "Admin logged out");

    ApiResponse::success(serde_json::json!({ "message": "Logged out" }))
}
