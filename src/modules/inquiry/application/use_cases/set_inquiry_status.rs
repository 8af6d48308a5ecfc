use async_trait::async_trait;
use uuid::Uuid;

use crate::inquiry::application::ports::outgoing::{InquiryRepository, InquiryRepositoryError};
use crate::inquiry::domain::entities::InquiryStatus;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetInquiryStatusError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ISetInquiryStatusUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, status: InquiryStatus) -> Result<(), SetInquiryStatusError>;
}

pub struct SetInquiryStatusUseCase<R: InquiryRepository> {
    inquiry_repository: R,
}

impl<R: InquiryRepository> SetInquiryStatusUseCase<R> {
    pub fn new(inquiry_repository: R) -> Self {
        Self { inquiry_repository }
    }
}

#[async_trait]
impl<R: InquiryRepository> ISetInquiryStatusUseCase for SetInquiryStatusUseCase<R> {
    async fn execute(&self, id: Uuid, status: InquiryStatus) -> Result<(), SetInquiryStatusError> {
        self.inquiry_repository
            .set_status(id, status)
            .await
            .map_err(|e| match e {
                InquiryRepositoryError::NotFound => SetInquiryStatusError::NotFound,
                InquiryRepositoryError::DatabaseError(msg) => {
                    SetInquiryStatusError::RepositoryError(msg)
                }
            })
    }
}
