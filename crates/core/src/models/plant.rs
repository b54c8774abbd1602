//! Plant entity and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Power, Timestamp};

/// Mid-level entity with a power ceiling. Owns its assets exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub max_power: Power,
    /// The owning energy manager. May dangle after the manager is deleted,
    /// or be `None` once detached.
    pub energy_manager_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new plant. Also the store's insert record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlant {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[validate(range(min = 0, message = "max_power must not be negative"))]
    pub max_power: Power,
    pub energy_manager_id: DbId,
}

/// DTO for replacing a plant's fields. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePlant {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    #[validate(range(min = 0, message = "max_power must not be negative"))]
    pub max_power: Power,
    pub energy_manager_id: DbId,
}
