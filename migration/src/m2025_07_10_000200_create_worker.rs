//! Migration to create the worker table.
//!
//! This migration creates the worker table which stores the people assigned
//! to a workplace. The foreign key is RESTRICT on delete: a workplace with
//! workers cannot be removed at the store level either.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Worker::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Worker::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Worker::FirstName).text().not_null())
                    .col(ColumnDef::new(Worker::LastName).text().not_null())
                    .col(ColumnDef::new(Worker::Position).text().not_null())
                    .col(ColumnDef::new(Worker::WorkplaceId).integer().not_null())
                    .col(
                        ColumnDef::new(Worker::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_worker_workplace_id")
                            .from(Worker::Table, Worker::WorkplaceId)
                            .to(Workplace::Table, Workplace::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the per-workplace count queries
        manager
            .create_index(
                Index::create()
                    .name("idx_worker_workplace_id")
                    .table(Worker::Table)
                    .col(Worker::WorkplaceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_worker_workplace_id").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Worker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Worker {
    Table,
    Id,
    FirstName,
    LastName,
    Position,
    WorkplaceId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Workplace {
    Table,
    Id,
}
