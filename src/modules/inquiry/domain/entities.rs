use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inquiry lifecycle. New rows are always `pending`; the status is
/// assigned server-side, never taken from the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    Pending,
    InProgress,
    Completed,
}

impl InquiryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "pending",
            InquiryStatus::InProgress => "in_progress",
            InquiryStatus::Completed => "completed",
        }
    }

    /// Korean badge label used by the admin console.
    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "대기",
            InquiryStatus::InProgress => "진행중",
            InquiryStatus::Completed => "완료",
        }
    }

    /// Stored values outside the known set degrade to `pending`, the
    /// same fallback the console uses for unknown badges.
    pub fn parse_stored(value: &str) -> Self {
        match value {
            "in_progress" => InquiryStatus::InProgress,
            "completed" => InquiryStatus::Completed,
            _ => InquiryStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service_type: String,
    pub message: String,
    pub status: InquiryStatus,
    pub status_label: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
