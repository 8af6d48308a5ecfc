pub mod sea_orm_entity;
pub mod service_query_postgres;
