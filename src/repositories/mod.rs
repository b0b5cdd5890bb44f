//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities, providing a clean API for data access
//! and enforcing the deletion-guard and referential-integrity invariants.

pub mod workplace;
pub mod worker;

pub use worker::{CreateWorkerRequest, WorkerRepository};
pub use workplace::{CreateWorkplaceRequest, WorkplaceRepository};
