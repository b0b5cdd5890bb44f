//! Migration to create the workplace table.
//!
//! This migration creates the baseline workplace table with an auto-increment
//! integer primary key and the name/city columns.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Workplace::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Workplace::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Workplace::Name).text().not_null())
                    .col(ColumnDef::new(Workplace::City).text().not_null())
                    .col(
                        ColumnDef::new(Workplace::CreatedAt)
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
            .drop_table(Table::drop().table(Workplace::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Workplace {
    Table,
    Id,
    Name,
    City,
    CreatedAt,
}
