pub use sea_orm_migration::prelude::*;

mod m20250610_000001_create_users_table;
mod m20250610_000002_create_user_roles_table;
mod m20250612_000001_create_categories_table;
mod m20250612_000002_create_events_table;
mod m20250612_000003_create_event_participants_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_create_users_table::Migration),
            Box::new(m20250610_000002_create_user_roles_table::Migration),
            Box::new(m20250612_000001_create_categories_table::Migration),
            Box::new(m20250612_000002_create_events_table::Migration),
            Box::new(m20250612_000003_create_event_participants_table::Migration),
        ]
    }
}
