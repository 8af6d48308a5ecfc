use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Inquiries::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Inquiries::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Inquiries::Phone).string_len(50))
                    .col(ColumnDef::new(Inquiries::ServiceType).string_len(100).not_null())
                    .col(ColumnDef::new(Inquiries::Message).text().not_null())
                    .col(
                        ColumnDef::new(Inquiries::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Inquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_inquiries_created_at
                ON inquiries (created_at DESC);
                "#,
            )
            .await?;

        // Dashboard counts and triage filter both query by status
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_inquiries_status
                ON inquiries (status);
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
                DROP INDEX IF EXISTS idx_inquiries_created_at;
                DROP INDEX IF EXISTS idx_inquiries_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    Name,
    Email,
    Phone,
    ServiceType,
    Message,
    Status,
    CreatedAt,
}
