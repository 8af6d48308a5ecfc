use async_trait::async_trait;

use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};
use crate::portfolio::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPortfoliosError {
    #[error("Failed to load portfolio: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait IGetPortfoliosUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Portfolio>, GetPortfoliosError>;
}

pub struct GetPortfoliosUseCase<Q: PortfolioQuery> {
    query: Q,
}

impl<Q: PortfolioQuery> GetPortfoliosUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: PortfolioQuery> IGetPortfoliosUseCase for GetPortfoliosUseCase<Q> {
    async fn execute(&self) -> Result<Vec<Portfolio>, GetPortfoliosError> {
        self.query
            .list_newest_first()
            .await
            .map_err(|PortfolioQueryError::DatabaseError(e)| GetPortfoliosError::QueryError(e))
    }
}
