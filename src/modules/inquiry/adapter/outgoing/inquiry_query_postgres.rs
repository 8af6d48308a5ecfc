use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use super::sea_orm_entity::{Column, Entity as InquiryEntity};
use crate::inquiry::application::ports::outgoing::{InquiryQuery, InquiryQueryError};
use crate::inquiry::domain::entities::{Inquiry, InquiryStatus};

#[derive(Debug, Clone)]
pub struct InquiryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl InquiryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryQuery for InquiryQueryPostgres {
    async fn list(
        &self,
        status: Option<InquiryStatus>,
    ) -> Result<Vec<Inquiry>, InquiryQueryError> {
        let mut select = InquiryEntity::find().order_by_desc(Column::CreatedAt);

        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let rows = select
            .all(&*self.db)
            .await
            .map_err(|e| InquiryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|model| model.to_domain()).collect())
    }

    async fn count_all(&self) -> Result<u64, InquiryQueryError> {
        InquiryEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| InquiryQueryError::DatabaseError(e.to_string()))
    }

    async fn count_by_status(&self, status: InquiryStatus) -> Result<u64, InquiryQueryError> {
        InquiryEntity::find()
            .filter(Column::Status.eq(status.as_str()))
            .count(&*self.db)
            .await
            .map_err(|e| InquiryQueryError::DatabaseError(e.to_string()))
    }

    async fn recent(&self, limit: u64) -> Result<Vec<Inquiry>, InquiryQueryError> {
        let rows = InquiryEntity::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(|e| InquiryQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|model| model.to_domain()).collect())
    }
}
