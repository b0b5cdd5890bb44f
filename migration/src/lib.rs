//! Database migrations for the Workforce Admin service.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_07_10_000100_create_workplace;
mod m2025_07_10_000200_create_worker;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_07_10_000100_create_workplace::Migration),
            Box::new(m2025_07_10_000200_create_worker::Migration),
        ]
    }
}
