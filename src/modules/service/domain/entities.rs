use serde::Serialize;
use uuid::Uuid;

/// One entry of the service catalog shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order_index: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
