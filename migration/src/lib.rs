pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_admins_table;
mod m20250801_000002_create_site_content_table;
mod m20250801_000003_create_services_table;
mod m20250801_000004_create_portfolio_table;
mod m20250801_000005_create_inquiries_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_admins_table::Migration),
            Box::new(m20250801_000002_create_site_content_table::Migration),
            Box::new(m20250801_000003_create_services_table::Migration),
            Box::new(m20250801_000004_create_portfolio_table::Migration),
            Box::new(m20250801_000005_create_inquiries_table::Migration),
        ]
    }
}
