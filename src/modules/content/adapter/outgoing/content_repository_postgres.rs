use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use super::sea_orm_entity::{ActiveModel, Column, Entity as SiteContentEntity};
use crate::content::application::ports::outgoing::{ContentRepository, ContentRepositoryError};
use crate::content::domain::entities::SectionKey;

#[derive(Debug, Clone)]
pub struct ContentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryPostgres {
    async fn find_section(
        &self,
        key: SectionKey,
    ) -> Result<Option<serde_json::Value>, ContentRepositoryError> {
        let row = SiteContentEntity::find_by_id(key.as_str())
            .one(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|model| model.content))
    }

    async fn upsert_section(
        &self,
        key: SectionKey,
        document: serde_json::Value,
    ) -> Result<(), ContentRepositoryError> {
        let active = ActiveModel {
            id: Set(key.as_str().to_string()),
            section: Set(key.as_str().to_string()),
            content: Set(document),
            updated_at: Set(chrono::Utc::now().into()),
        };

        SiteContentEntity::insert(active)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([Column::Section, Column::Content, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&*self.db)
            .await
            .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::adapter::outgoing::sea_orm_entity::Model as SiteContentModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn hero_row() -> SiteContentModel {
        SiteContentModel {
            id: "hero".to_string(),
            section: "hero".to_string(),
            content: serde_json::json!({ "title": "맞춤 제목" }),
            updated_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_section_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![hero_row()]])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_section(SectionKey::Hero).await.unwrap();

        assert_eq!(result, Some(serde_json::json!({ "title": "맞춤 제목" })));
    }

    #[tokio::test]
    async fn test_find_section_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<SiteContentModel>::new()])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_section(SectionKey::About).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_section_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_section(SectionKey::Contact).await;

        assert!(matches!(
            result,
            Err(ContentRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_upsert_section_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .upsert_section(SectionKey::Hero, serde_json::json!({ "title": "새 제목" }))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_upsert_section_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = ContentRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .upsert_section(SectionKey::Hero, serde_json::json!({}))
            .await;

        assert!(matches!(
            result,
            Err(ContentRepositoryError::DatabaseError(_))
        ));
    }
}
