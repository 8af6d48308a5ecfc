use serde::Serialize;
use uuid::Uuid;

/// Identity of the backoffice admin holding the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AdminId(Uuid);

impl AdminId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for AdminId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
