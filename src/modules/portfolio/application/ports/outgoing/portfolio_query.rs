use async_trait::async_trait;

use crate::portfolio::domain::entities::Portfolio;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn list_newest_first(&self) -> Result<Vec<Portfolio>, PortfolioQueryError>;

    /// Count-only query for the dashboard card.
    async fn count_all(&self) -> Result<u64, PortfolioQueryError>;
}
