//! # Data Models
//!
//! This module contains the SeaORM entities and shared response models used
//! throughout the Workforce Admin service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod workplace;
pub mod worker;

pub use worker::Entity as Worker;
pub use workplace::Entity as Workplace;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "workforce-admin".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
