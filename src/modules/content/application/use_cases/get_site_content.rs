use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::content::application::ports::outgoing::{ContentRepository, ContentRepositoryError};
use crate::content::domain::entities::{SectionKey, SiteContent};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetContentError {
    #[error("Failed to load site content: {0}")]
    RepositoryError(String),
}

impl From<ContentRepositoryError> for GetContentError {
    fn from(e: ContentRepositoryError) -> Self {
        GetContentError::RepositoryError(e.to_string())
    }
}

#[async_trait]
pub trait IGetSiteContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteContent, GetContentError>;
}

pub struct GetSiteContentUseCase<R: ContentRepository> {
    repository: R,
}

impl<R: ContentRepository> GetSiteContentUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// A stored document that fails to parse counts as absent, so a bad
    /// write can never blank the public page.
    async fn resolve_section<T: DeserializeOwned + Default>(
        &self,
        key: SectionKey,
    ) -> Result<T, GetContentError> {
        let stored = self.repository.find_section(key).await?;

        Ok(match stored {
            Some(document) => serde_json::from_value(document).unwrap_or_else(|e| {
                warn!(
                    section = key.as_str(),
                    error = %e,
                    "Stored section document is malformed, serving defaults"
                );
                T::default()
            }),
            None => T::default(),
        })
    }
}

#[async_trait]
impl<R: ContentRepository> IGetSiteContentUseCase for GetSiteContentUseCase<R> {
    async fn execute(&self) -> Result<SiteContent, GetContentError> {
        Ok(SiteContent {
            hero: self.resolve_section(SectionKey::Hero).await?,
            about: self.resolve_section(SectionKey::About).await?,
            contact: self.resolve_section(SectionKey::Contact).await?,
        })
    }
}
