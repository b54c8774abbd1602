//! Energy manager row.

use plant_core::models::EnergyManager;
use plant_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `energy_managers` table.
#[derive(Debug, Clone, FromRow)]
pub struct EnergyManagerRow {
    pub id: DbId,
    pub name: String,
    pub surname: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<EnergyManagerRow> for EnergyManager {
    fn from(row: EnergyManagerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
