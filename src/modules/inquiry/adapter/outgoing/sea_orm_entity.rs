use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub phone: Option<String>,

    pub service_type: String,

    pub message: String,

    /// Stored as the status wire name; unknown legacy values degrade
    /// to `pending` on read.
    pub status: String,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Inquiry {
        let status = InquiryStatus::parse_stored(&self.status);
        Inquiry {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service_type: self.service_type.clone(),
            message: self.message.clone(),
            status,
            status_label: status.label().to_string(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
