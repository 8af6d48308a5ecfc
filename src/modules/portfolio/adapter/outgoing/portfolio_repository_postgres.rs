use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Entity as PortfolioEntity, Model as PortfolioModel};
use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError, PortfolioWriteData,
};
use crate::portfolio::domain::entities::Portfolio;

#[derive(Debug, Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn write_fields(data: PortfolioWriteData) -> ActiveModel {
        ActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            image_url: Set(data.image_url),
            category: Set(data.category.as_str().to_string()),
            client_name: Set(data.client_name),
            project_date: Set(data.project_date),
            is_featured: Set(data.is_featured),
            ..Default::default()
        }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn create(
        &self,
        data: PortfolioWriteData,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        let mut active = Self::write_fields(data);
        active.id = Set(Uuid::new_v4());

        let inserted: PortfolioModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| PortfolioRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: PortfolioWriteData,
    ) -> Result<Portfolio, PortfolioRepositoryError> {
        let mut active = Self::write_fields(data);
        active.id = Set(id);

        let updated: PortfolioModel = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => PortfolioRepositoryError::NotFound,
            other => PortfolioRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), PortfolioRepositoryError> {
        let result = PortfolioEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| PortfolioRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }

        Ok(())
    }
}
