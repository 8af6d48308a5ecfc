use async_trait::async_trait;

use crate::auth::domain::entities::Admin;

#[async_trait]
pub trait AdminQuery: Send + Sync {
    /// Lookup by normalized (lowercased) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, String>;
}
