//! Workplace entity model
//!
//! This module contains the SeaORM entity model for the workplace table.
//! A workplace owns zero or more workers; the worker count surfaced by the
//! API is derived from the relationship, not stored.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// Workplace entity representing an organization location
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workplace")]
pub struct Model {
    /// Unique identifier for the workplace (auto-increment primary key)
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Display name of the workplace
    pub name: String,

    /// City the workplace is located in
    pub city: String,

    /// Timestamp when the workplace was created
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::worker::Entity")]
    Worker,
}

impl Related<super::worker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Worker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
