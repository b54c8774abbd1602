//! Asset entity, type enumeration and DTOs.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Power, Timestamp};

/// The fixed set of asset kinds a plant may host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "furnace")]
    Furnace,
    #[serde(rename = "compressor")]
    Compressor,
    #[serde(rename = "chiller")]
    Chiller,
    #[serde(rename = "rolling mill")]
    RollingMill,
}

impl AssetType {
    pub const ALL: [AssetType; 4] = [
        AssetType::Furnace,
        AssetType::Compressor,
        AssetType::Chiller,
        AssetType::RollingMill,
    ];

    /// Canonical name, also the value stored in the `assets.asset_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetType::Furnace => "furnace",
            AssetType::Compressor => "compressor",
            AssetType::Chiller => "chiller",
            AssetType::RollingMill => "rolling mill",
        }
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf entity drawing power from exactly one plant for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: DbId,
    /// Immutable after creation.
    pub plant_id: DbId,
    pub name: String,
    pub max_power: Power,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an asset under a plant.
///
/// `asset_type` stays a raw string so an unknown type is reported as
/// `InvalidType` by the validator rather than as a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "max_power must not be negative"))]
    pub max_power: Power,
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// DTO for replacing an asset's mutable fields. The owning plant cannot change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAsset {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 0, message = "max_power must not be negative"))]
    pub max_power: Power,
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// Insert record handed to the store once the type has been validated.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub plant_id: DbId,
    pub name: String,
    pub max_power: Power,
    pub asset_type: AssetType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_matches_canonical_names() {
        for t in AssetType::ALL {
            assert_eq!(AssetType::from_name(t.as_str()), Some(t));
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(AssetType::from_name("Furnace"), None);
        assert_eq!(AssetType::from_name("rolling_mill"), None);
        assert_eq!(AssetType::from_name(" chiller"), None);
    }

    #[test]
    fn serializes_with_spaced_name() {
        let json = serde_json::to_string(&AssetType::RollingMill).unwrap();
        assert_eq!(json, "\"rolling mill\"");
    }

    #[test]
    fn create_asset_reads_type_field() {
        let input: CreateAsset = serde_json::from_value(serde_json::json!({
            "name": "Line 1",
            "max_power": 40,
            "type": "eau",
        }))
        .unwrap();
        assert_eq!(input.asset_type, "eau");
    }
}
