pub mod portfolio_query_postgres;
pub mod portfolio_repository_postgres;
pub mod sea_orm_entity;
