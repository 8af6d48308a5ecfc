use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per section; the section name doubles as the primary key so
        // repeated saves upsert instead of duplicating.
        manager
            .create_table(
                Table::create()
                    .table(SiteContent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteContent::Id)
                            .string_len(50)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteContent::Section).string_len(50).not_null())
                    .col(ColumnDef::new(SiteContent::Content).json_binary().not_null())
                    .col(
                        ColumnDef::new(SiteContent::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteContent {
    Table,
    Id,
    Section,
    Content,
    UpdatedAt,
}
