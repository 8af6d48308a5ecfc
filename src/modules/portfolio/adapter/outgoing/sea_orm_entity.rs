use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::portfolio::domain::entities::{Portfolio, PortfolioCategory};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "portfolio")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub image_url: String,

    /// Stored as the category's wire name; legacy values degrade to
    /// `other` on read.
    pub category: String,

    pub client_name: String,

    pub project_date: Option<Date>,

    pub is_featured: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Portfolio {
        let category = PortfolioCategory::parse_stored(&self.category);
        Portfolio {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            category,
            category_label: category.label().to_string(),
            client_name: self.client_name.clone(),
            project_date: self.project_date,
            is_featured: self.is_featured,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
