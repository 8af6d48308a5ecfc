use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::sea_orm_entity::{Column, Entity as ServiceEntity};
use crate::service::application::ports::outgoing::{ServiceQuery, ServiceQueryError};
use crate::service::domain::entities::Service;

#[derive(Debug, Clone)]
pub struct ServiceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceQuery for ServiceQueryPostgres {
    async fn list_ordered(&self) -> Result<Vec<Service>, ServiceQueryError> {
        let rows = ServiceEntity::find()
            .order_by_asc(Column::OrderIndex)
            .all(&*self.db)
            .await
            .map_err(|e| ServiceQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|model| model.to_domain()).collect())
    }
}
