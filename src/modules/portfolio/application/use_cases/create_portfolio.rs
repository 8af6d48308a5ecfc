use async_trait::async_trait;
use chrono::NaiveDate;

use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError, PortfolioWriteData,
};
use crate::portfolio::domain::entities::{Portfolio, PortfolioCategory};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioDraftError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Description cannot be empty")]
    EmptyDescription,
}

/// Validated portfolio payload shared by create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDraft {
    data: PortfolioWriteData,
}

impl PortfolioDraft {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: &str,
        description: &str,
        image_url: &str,
        category: PortfolioCategory,
        client_name: &str,
        project_date: Option<NaiveDate>,
        is_featured: bool,
    ) -> Result<Self, PortfolioDraftError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PortfolioDraftError::EmptyTitle);
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(PortfolioDraftError::EmptyDescription);
        }

        Ok(Self {
            data: PortfolioWriteData {
                title: title.to_string(),
                description: description.to_string(),
                image_url: image_url.trim().to_string(),
                category,
                client_name: client_name.trim().to_string(),
                project_date,
                is_featured,
            },
        })
    }

    pub fn into_write_data(self) -> PortfolioWriteData {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePortfolioError {
    #[error("Failed to create portfolio item: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreatePortfolioUseCase: Send + Sync {
    async fn execute(&self, draft: PortfolioDraft) -> Result<Portfolio, CreatePortfolioError>;
}

pub struct CreatePortfolioUseCase<R: PortfolioRepository> {
    repository: R,
}

impl<R: PortfolioRepository> CreatePortfolioUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PortfolioRepository> ICreatePortfolioUseCase for CreatePortfolioUseCase<R> {
    async fn execute(&self, draft: PortfolioDraft) -> Result<Portfolio, CreatePortfolioError> {
        self.repository
            .create(draft.into_write_data())
            .await
            .map_err(|e| match e {
                PortfolioRepositoryError::NotFound => {
                    // create never reports NotFound; treat as a store fault
                    CreatePortfolioError::RepositoryError(e.to_string())
                }
                PortfolioRepositoryError::DatabaseError(msg) => {
                    CreatePortfolioError::RepositoryError(msg)
                }
            })
    }
}
