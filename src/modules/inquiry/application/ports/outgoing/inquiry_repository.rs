use async_trait::async_trait;
use uuid::Uuid;

use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};

/// Submission payload; `status` and `created_at` are store-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InquiryRepositoryError {
    #[error("Inquiry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryRepositoryError>;

    /// Idempotent; setting the current status again succeeds. `NotFound`
    /// only when the row does not exist.
    async fn set_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<(), InquiryRepositoryError>;
}
