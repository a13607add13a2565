pub mod sea_orm_entity;

mod event_query_postgres;
mod event_repository_postgres;

pub use event_query_postgres::EventQueryPostgres;
pub use event_repository_postgres::EventRepositoryPostgres;
