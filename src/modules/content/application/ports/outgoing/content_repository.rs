use async_trait::async_trait;

use crate::content::domain::entities::SectionKey;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Raw section documents as stored; the use cases own the typed
/// interpretation so a malformed row never breaks a read.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_section(
        &self,
        key: SectionKey,
    ) -> Result<Option<serde_json::Value>, ContentRepositoryError>;

    async fn upsert_section(
        &self,
        key: SectionKey,
        document: serde_json::Value,
    ) -> Result<(), ContentRepositoryError>;
}
