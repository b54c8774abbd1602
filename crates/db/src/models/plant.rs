//! Plant row.

use plant_core::models::Plant;
use plant_core::types::{DbId, Power, Timestamp};
use sqlx::FromRow;

/// A row from the `plants` table.
#[derive(Debug, Clone, FromRow)]
pub struct PlantRow {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub max_power: Power,
    /// Not a foreign key; may name a deleted manager.
    pub energy_manager_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<PlantRow> for Plant {
    fn from(row: PlantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            max_power: row.max_power,
            energy_manager_id: row.energy_manager_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
