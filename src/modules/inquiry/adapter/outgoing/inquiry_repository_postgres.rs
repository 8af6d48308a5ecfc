use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity as InquiryEntity, Model as InquiryModel};
use crate::inquiry::application::ports::outgoing::{
    InquiryRepository, InquiryRepositoryError, NewInquiry,
};
use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};

#[derive(Debug, Clone)]
pub struct InquiryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryRepository for InquiryRepositoryPostgres {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(inquiry.name),
            email: Set(inquiry.email),
            phone: Set(inquiry.phone),
            service_type: Set(inquiry.service_type),
            message: Set(inquiry.message),
            status: Set(InquiryStatus::Pending.as_str().to_string()),
            ..Default::default()
        };

        let inserted: InquiryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| InquiryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Result<(), InquiryRepositoryError> {
        let result = InquiryEntity::update_many()
            .col_expr(Column::Status, Expr::value(status.as_str()))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(|e| InquiryRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(InquiryRepositoryError::NotFound);
        }

        Ok(())
    }
}
