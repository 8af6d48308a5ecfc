use async_trait::async_trait;
use tracing::error;

use crate::content::application::ports::outgoing::{ContentRepository, ContentRepositoryError};
use crate::content::domain::entities::{SectionKey, SiteContent};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SaveContentError {
    #[error("Failed to save section '{section}': {message}")]
    RepositoryError {
        section: &'static str,
        message: String,
    },

    #[error("Failed to serialize section '{0}'")]
    SerializationError(&'static str),
}

#[async_trait]
pub trait ISaveSiteContentUseCase: Send + Sync {
    async fn execute(&self, content: SiteContent) -> Result<(), SaveContentError>;
}

pub struct SaveSiteContentUseCase<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> SaveSiteContentUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    async fn upsert(
        &self,
        key: SectionKey,
        document: serde_json::Value,
    ) -> Result<(), SaveContentError> {
        self.repository
            .upsert_section(key, document)
            .await
            .map_err(|ContentRepositoryError::DatabaseError(message)| {
                error!(section = key.as_str(), error = %message, "Section upsert failed");
                SaveContentError::RepositoryError {
                    section: key.as_str(),
                    message,
                }
            })
    }
}

#[async_trait]
impl<R: ContentRepository> ISaveSiteContentUseCase for SaveSiteContentUseCase<R> {
    /// Three independent upserts, in section order, aborting on the first
    /// failure. Earlier upserts stay committed; the caller is told the save
    /// failed as a whole and retries the full payload.
    async fn execute(&self, content: SiteContent) -> Result<(), SaveContentError> {
        let hero = serde_json::to_value(&content.hero)
            .map_err(|_| SaveContentError::SerializationError(SectionKey::Hero.as_str()))?;
        let about = serde_json::to_value(&content.about)
            .map_err(|_| SaveContentError::SerializationError(SectionKey::About.as_str()))?;
        let contact = serde_json::to_value(&content.contact)
            .map_err(|_| SaveContentError::SerializationError(SectionKey::Contact.as_str()))?;

        self.upsert(SectionKey::Hero, hero).await?;
        self.upsert(SectionKey::About, about).await?;
        self.upsert(SectionKey::Contact, contact).await?;

        Ok(())
    }
}
