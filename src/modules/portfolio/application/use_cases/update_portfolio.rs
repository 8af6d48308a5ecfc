use async_trait::async_trait;
use uuid::Uuid;

use super::create_portfolio::PortfolioDraft;
use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::portfolio::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePortfolioError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("Failed to update portfolio item: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdatePortfolioUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        draft: PortfolioDraft,
    ) -> Result<Portfolio, UpdatePortfolioError>;
}

pub struct UpdatePortfolioUseCase<R: PortfolioRepository> {
    repository: R,
}

impl<R: PortfolioRepository> UpdatePortfolioUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PortfolioRepository> IUpdatePortfolioUseCase for UpdatePortfolioUseCase<R> {
    async fn execute(
        &self,
        id: Uuid,
        draft: PortfolioDraft,
    ) -> Result<Portfolio, UpdatePortfolioError> {
        self.repository
            .update(id, draft.into_write_data())
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => UpdatePortfolioError::NotFound,
                PortfolioRepositoryError::DatabaseError(msg) => {
                    UpdatePortfolioError::RepositoryError(msg)
                }
            })
    }
}
