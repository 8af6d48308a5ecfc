use crate::inquiry::application::use_cases::submit_inquiry::{
    SubmitInquiryCommand, SubmitInquiryError,
};
use crate::inquiry::domain::entities::Inquiry;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// All fields default so that a missing field surfaces as the public
/// "required fields" message rather than a deserialization error.
#[derive(Deserialize)]
pub struct ContactRequestDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub message: String,
}

/// The public contact form keeps its own flat wire format instead of
/// the admin envelope.
#[derive(Serialize)]
struct ContactAccepted {
    message: &'static str,
    data: Inquiry,
}

#[derive(Serialize)]
struct ContactRejected {
    error: String,
}

#[post("/api/contact")]
pub async fn submit_contact_handler(
    body: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();

    let command = match SubmitInquiryCommand::new(
        &dto.name,
        &dto.email,
        dto.phone.as_deref(),
        &dto.service_type,
        &dto.message,
    ) {
        Ok(command) => command,
        Err(e) => {
            return HttpResponse::BadRequest().json(ContactRejected {
                error: e.to_string(),
            })
        }
    };

    match data.submit_inquiry_use_case.execute(command).await {
        Ok(inquiry) => {
            info!(inquiry_id = %inquiry.id, "Contact inquiry accepted");
            HttpResponse::Created().json(ContactAccepted {
                message: "문의가 성공적으로 접수되었습니다.",
                data: inquiry,
            })
        }
        Err(SubmitInquiryError::StorageError(ref e)) => {
            error!(error = %e, "Contact inquiry could not be stored");
            HttpResponse::InternalServerError().json(ContactRejected {
                error: "문의 접수 중 오류가 발생했습니다.".to_string(),
            })
        }
        Err(e) => HttpResponse::BadRequest().json(ContactRejected {
            error: e.to_string(),
        }),
    }
}
