use async_trait::async_trait;

use crate::inquiry::application::ports::outgoing::{InquiryQuery, InquiryQueryError};
use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetInquiriesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetInquiriesUseCase: Send + Sync {
    async fn execute(
        &self,
        status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, GetInquiriesError>;
}

pub struct GetInquiriesUseCase<Q: InquiryQuery> {
    inquiry_query: Q,
}

impl<Q: InquiryQuery> GetInquiriesUseCase<Q> {
    pub fn new(inquiry_query: Q) -> Self {
        Self { inquiry_query }
    }
}

#[async_trait]
impl<Q: InquiryQuery> IGetInquiriesUseCase for GetInquiriesUseCase<Q> {
    async fn execute(
        &self,
        status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, GetInquiriesError> {
        self.inquiry_query
            .list(status)
            .await
            .map_err(|InquiryQueryError::DatabaseError(msg)| GetInquiriesError::QueryError(msg))
    }
}
