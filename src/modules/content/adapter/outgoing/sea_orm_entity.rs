use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "site_content")]
pub struct Model {
    /// The section name doubles as the primary key, one row per section.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub section: String,

    pub content: Json,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
