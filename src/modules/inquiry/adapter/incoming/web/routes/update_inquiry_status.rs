use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::inquiry::application::use_cases::set_inquiry_status::SetInquiryStatusError;
use crate::inquiry::domain::entities::InquiryStatus;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct UpdateStatusDto {
    pub status: InquiryStatus,
}

#[derive(Serialize)]
struct UpdatedStatus {
    id: Uuid,
    status: InquiryStatus,
    status_label: &'static str,
}

#[patch("/api/admin/inquiries/{id}/status")]
pub async fn update_inquiry_status_handler(
    session: AdminSession,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let status = body.into_inner().status;

    match data.set_inquiry_status_use_case.execute(id, status).await {
        Ok(()) => {
            info!(
                admin_id = %session.admin_id,
                inquiry_id = %id,
                status = status.as_str(),
                "Inquiry status updated"
            );
            ApiResponse::success(UpdatedStatus {
                id,
                status,
                status_label: status.label(),
            })
        }
        Err(SetInquiryStatusError::NotFound) => {
            ApiResponse::not_found("INQUIRY_NOT_FOUND", "Inquiry not found")
        }
        Err(SetInquiryStatusError::RepositoryError(ref e)) => {
            error!(error = %e, inquiry_id = %id, "Inquiry status update failed");
            ApiResponse::internal_error()
        }
    }
}
