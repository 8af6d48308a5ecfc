use async_trait::async_trait;

use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InquiryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait InquiryQuery: Send + Sync {
    /// Newest-first, optionally restricted to one status.
    async fn list(
        &self,
        status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, InquiryQueryError>;

    async fn count_all(&self) -> Result<u64, InquiryQueryError>;

    async fn count_by_status(&self, status: InquiryStatus) -> Result<u64, InquiryQueryError>;

    /// The `limit` most recent inquiries, newest-first.
    async fn recent(&self, limit: u64) -> Result<Vec<Inquiry>, InquiryQueryError>;
}
