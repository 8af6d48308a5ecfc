use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeletePortfolioError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("Failed to delete portfolio item: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeletePortfolioUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeletePortfolioError>;
}

pub struct DeletePortfolioUseCase<R: PortfolioRepository> {
    repository: R,
}

impl<R: PortfolioRepository> DeletePortfolioUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PortfolioRepository> IDeletePortfolioUseCase for DeletePortfolioUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), DeletePortfolioError> {
        self.repository.delete(id).await.map_err(|e| match e {
            PortfolioRepositoryError::NotFound => DeletePortfolioError::NotFound,
            PortfolioRepositoryError::DatabaseError(msg) => {
                DeletePortfolioError::RepositoryError(msg)
            }
        })
    }
}
