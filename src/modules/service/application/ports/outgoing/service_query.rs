use async_trait::async_trait;

use crate::service::domain::entities::Service;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ServiceQuery: Send + Sync {
    /// All services, `order_index` ascending.
    async fn list_ordered(&self) -> Result<Vec<Service>, ServiceQueryError>;
}
