use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder};

use super::sea_orm_entity::{Column, Entity as PortfolioEntity};
use crate::portfolio::application::ports::outgoing::{PortfolioQuery, PortfolioQueryError};
use crate::portfolio::domain::entities::Portfolio;

#[derive(Debug, Clone)]
pub struct PortfolioQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioQuery for PortfolioQueryPostgres {
    async fn list_newest_first(&self) -> Result<Vec<Portfolio>, PortfolioQueryError> {
        let rows = PortfolioEntity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| PortfolioQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|model| model.to_domain()).collect())
    }

    async fn count_all(&self) -> Result<u64, PortfolioQueryError> {
        PortfolioEntity::find()
            .count(&*self.db)
            .await
            .map_err(|e| PortfolioQueryError::DatabaseError(e.to_string()))
    }
}
