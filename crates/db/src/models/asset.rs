//! Asset row.

use plant_core::models::{Asset, AssetType};
use plant_core::store::StoreError;
use plant_core::types::{DbId, Power, Timestamp};
use sqlx::FromRow;

/// A row from the `assets` table.
///
/// `asset_type` is stored as its canonical name; the column's CHECK
/// constraint keeps it inside the enumeration.
#[derive(Debug, Clone, FromRow)]
pub struct AssetRow {
    pub id: DbId,
    pub plant_id: DbId,
    pub name: String,
    pub max_power: Power,
    pub asset_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<AssetRow> for Asset {
    type Error = StoreError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let asset_type = AssetType::from_name(&row.asset_type).ok_or_else(|| {
            StoreError::new(format!(
                "asset {} has unknown type '{}' in storage",
                row.id, row.asset_type
            ))
        })?;
        Ok(Self {
            id: row.id,
            plant_id: row.plant_id,
            name: row.name,
            max_power: row.max_power,
            asset_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(asset_type: &str) -> AssetRow {
        AssetRow {
            id: 1,
            plant_id: 2,
            name: "Mill".to_string(),
            max_power: 30,
            asset_type: asset_type.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn converts_known_type() {
        let asset = Asset::try_from(row("rolling mill")).unwrap();
        assert_eq!(asset.asset_type, AssetType::RollingMill);
        assert_eq!(asset.plant_id, 2);
    }

    #[test]
    fn unknown_stored_type_is_a_store_error() {
        let err = Asset::try_from(row("kiln")).unwrap_err();
        assert!(err.message().contains("kiln"));
    }
}
