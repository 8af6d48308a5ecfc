use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::service::domain::entities::Service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub icon: String,

    pub order_index: i32,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Service {
        Service {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            order_index: self.order_index,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
