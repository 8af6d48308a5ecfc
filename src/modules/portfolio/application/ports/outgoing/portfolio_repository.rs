use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::portfolio::domain::entities::{Portfolio, PortfolioCategory};

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioWriteData {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: PortfolioCategory,
    pub client_name: String,
    pub project_date: Option<NaiveDate>,
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Portfolio item not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn create(&self, data: PortfolioWriteData)
        -> Result<Portfolio, PortfolioRepositoryError>;

    /// Full-field update; `NotFound` if the row does not exist.
    async fn update(
        &self,
        id: Uuid,
        data: PortfolioWriteData,
    ) -> Result<Portfolio, PortfolioRepositoryError>;

    /// `NotFound` if the row does not exist; deletion is never silent.
    async fn delete(&self, id: Uuid) -> Result<(), PortfolioRepositoryError>;
}
