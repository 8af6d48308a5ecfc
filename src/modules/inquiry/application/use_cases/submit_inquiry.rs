use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

use crate::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError, NewInquiry,
};
use crate::inquiry::domain::entities::Inquiry;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitInquiryError {
    #[error("필수 항목을 모두 입력해주세요.")]
    MissingRequiredField,

    #[error("올바른 이메일 형식이 아닙니다.")]
    InvalidEmail,

    #[error("문의 접수 중 오류가 발생했습니다.")]
    StorageError(String),
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Validated contact-form submission. `name`, `email`, `service_type`
/// and `message` are required; `phone` is optional and blank collapses
/// to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitInquiryCommand {
    name: String,
    email: String,
    phone: Option<String>,
    service_type: String,
    message: String,
}

impl SubmitInquiryCommand {
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<&str>,
        service_type: &str,
        message: &str,
    ) -> Result<Self, SubmitInquiryError> {
        let name = name.trim();
        let email = email.trim();
        let service_type = service_type.trim();
        let message = message.trim();

        if name.is_empty() || email.is_empty() || service_type.is_empty() || message.is_empty() {
            return Err(SubmitInquiryError::MissingRequiredField);
        }

        if !email_pattern().is_match(email) {
            return Err(SubmitInquiryError::InvalidEmail);
        }

        let phone = phone
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned);

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            phone,
            service_type: service_type.to_owned(),
            message: message.to_owned(),
        })
    }

    fn into_new_inquiry(self) -> NewInquiry {
        NewInquiry {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            message: self.message,
        }
    }
}

#[async_trait]
pub trait ISubmitInquiryUseCase: Send + Sync {
    async fn execute(&self, command: SubmitInquiryCommand) -> Result<Inquiry, SubmitInquiryError>;
}

pub struct SubmitInquiryUseCase<R: InquiryRepository> {
    inquiry_repository: R,
}

impl<R: InquiryRepository> SubmitInquiryUseCase<R> {
    pub fn new(inquiry_repository: R) -> Self {
        Self { inquiry_repository }
    }
}

#[async_trait]
impl<R: InquiryRepository> ISubmitInquiryUseCase for SubmitInquiryUseCase<R> {
    async fn execute(&self, command: SubmitInquiryCommand) -> Result<Inquiry, SubmitInquiryError> {
        self.inquiry_repository
            .insert(command.into_new_inquiry())
            .await
            .map_err(|e| match e {
                InquiryRepositoryError::NotFound => SubmitInquiryError::StorageError(e.to_string()),
                InquiryRepositoryError::DatabaseError(msg) => SubmitInquiryError::StorageError(msg),
            })
    }
}
