use async_trait::async_trait;

use crate::service::application::ports::outgoing::{ServiceQuery, ServiceQueryError};
use crate::service::domain::entities::Service;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetServicesError {
    #[error("Failed to load services: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetServicesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Service>, GetServicesError>;
}

pub struct GetServicesUseCase<Q: ServiceQuery> {
    query: Q,
}

impl<Q: ServiceQuery> GetServicesUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: ServiceQuery> IGetServicesUseCase for GetServicesUseCase<Q> {
    async fn execute(&self) -> Result<Vec<Service>, GetServicesError> {
        self.query
            .list_ordered()
            .await
            .map_err(|ServiceQueryError::DatabaseError(e)| GetServicesError::QueryError(e))
    }
}
