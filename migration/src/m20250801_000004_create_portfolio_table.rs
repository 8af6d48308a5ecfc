use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Portfolio::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Portfolio::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Portfolio::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Portfolio::Description).text().not_null())
                    .col(ColumnDef::new(Portfolio::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Portfolio::Category).string_len(50).not_null())
                    .col(ColumnDef::new(Portfolio::ClientName).string_len(100).not_null())
                    .col(ColumnDef::new(Portfolio::ProjectDate).date())
                    .col(
                        ColumnDef::new(Portfolio::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Portfolio::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing is always newest-first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_portfolio_created_at
                ON portfolio (created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_portfolio_created_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Portfolio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Portfolio {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Category,
    ClientName,
    ProjectDate,
    IsFeatured,
    CreatedAt,
}
