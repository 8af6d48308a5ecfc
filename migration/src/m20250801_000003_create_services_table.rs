use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Services::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Services::Description).text().not_null())
                    .col(ColumnDef::new(Services::Icon).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Services::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Services::CreatedAt)
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
                CREATE INDEX idx_services_order_index
                ON services (order_index);
                "#,
            )
            .await?;

        // Default catalog shown on the landing page before any admin edits.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                INSERT INTO services (title, description, icon, order_index) VALUES
                ('SEO 최적화', '검색엔진 최적화를 통해 자연 유입을 극대화하고 브랜드 가시성을 높입니다.', 'search', 1),
                ('퍼포먼스 마케팅', '데이터 기반의 광고 운영으로 ROAS를 최적화하고 효율적인 예산 집행을 돕습니다.', 'chart', 2),
                ('바이럴 마케팅', '인플루언서, 커뮤니티를 활용한 입소문 마케팅으로 브랜드 인지도를 높입니다.', 'megaphone', 3),
                ('CRM 마케팅', '고객 데이터를 분석하여 맞춤형 마케팅 전략을 수립하고 재구매율을 높입니다.', 'users', 4),
                ('소셜 미디어 관리', '인스타그램, 페이스북 등 SNS 채널 운영으로 브랜드 팬덤을 구축합니다.', 'globe', 5),
                ('콘텐츠 제작', '블로그, 영상 등 다양한 형태의 콘텐츠로 고객과의 접점을 만듭니다.', 'pen', 6);
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
                DROP INDEX IF EXISTS idx_services_order_index;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    Icon,
    OrderIndex,
    CreatedAt,
}
