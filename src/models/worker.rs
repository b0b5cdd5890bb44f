//! Worker entity model
//!
//! This module contains the SeaORM entity model for the worker table. Every
//! worker belongs to exactly one workplace; the foreign key is RESTRICT on
//! delete so the store backs up the application-level deletion guard.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Worker entity representing a person assigned to a workplace
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "worker")]
pub struct Model {
    /// Unique identifier for the worker (auto-increment primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// First name of the worker
    pub first_name: String,

    /// Last name of the worker
    pub last_name: String,

    /// Position or title held at the workplace
    pub position: String,

    /// Workplace this worker is assigned to
    pub workplace_id: i32,

    /// Timestamp when the worker was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workplace::Entity",
        from = "Column::WorkplaceId",
        to = "super::workplace::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Workplace,
}

impl Related<super::workplace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workplace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
