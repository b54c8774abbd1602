//! Energy manager entity and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Top-level owner. Supervises zero or more plants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyManager {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new energy manager. Also the store's insert record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEnergyManager {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "surname must not be empty"))]
    pub surname: String,
}

/// DTO for replacing an energy manager's fields. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEnergyManager {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "surname must not be empty"))]
    pub surname: String,
}
