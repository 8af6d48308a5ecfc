use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::dashboard::application::use_cases::get_dashboard_stats::GetDashboardStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_dashboard_stats_use_case.execute().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(GetDashboardStatsError::QueryError(ref e)) => {
            error!(error = %e, "Failed to aggregate dashboard stats");
            ApiResponse::internal_error()
        }
    }
}
