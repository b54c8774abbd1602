//! Capacity and referential-integrity checks.
//!
//! Pure functions: every input is passed in by the caller and nothing here
//! touches the store. The hierarchy service reads the relevant snapshot,
//! calls into this module, then writes only if the check passed.

use validator::Validate;

use crate::error::CoreError;
use crate::models::AssetType;
use crate::types::{DbId, Power};

/// Check that `name` is one of the fixed asset types (exact, case-sensitive).
pub fn validate_asset_type(name: &str) -> Result<AssetType, CoreError> {
    AssetType::from_name(name).ok_or_else(|| CoreError::InvalidType(name.to_string()))
}

/// Check that a plant's asset budget still holds after a change.
///
/// The post-change total is `sum(existing) - excluded + candidate`. `excluded`
/// is the old power of an asset being updated in place (zero otherwise), so
/// that asset is not counted twice. A total equal to `plant_max_power` is
/// accepted.
pub fn validate_capacity<I>(
    existing_powers: I,
    candidate_power: Power,
    plant_max_power: Power,
    excluded_power: Power,
) -> Result<(), CoreError>
where
    I: IntoIterator<Item = Power>,
{
    // Widened so a pathological sum cannot wrap past the ceiling.
    let committed: i128 = existing_powers.into_iter().map(i128::from).sum();
    let requested = committed - i128::from(excluded_power) + i128::from(candidate_power);

    if requested > i128::from(plant_max_power) {
        return Err(CoreError::CapacityExceeded {
            requested,
            max_power: plant_max_power,
        });
    }
    Ok(())
}

/// Check that a referenced owner was found by the caller's lookup.
///
/// Returns the owner on success so callers can keep using it.
pub fn validate_owner_exists<T>(
    entity: &'static str,
    owner_id: DbId,
    lookup: Option<T>,
) -> Result<T, CoreError> {
    lookup.ok_or(CoreError::InvalidReference {
        entity,
        id: owner_id,
    })
}

/// Run the DTO's field rules, flattening failures into one message.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::CreatePlant;

    #[test]
    fn accepts_every_known_type() {
        assert_eq!(validate_asset_type("furnace").unwrap(), AssetType::Furnace);
        assert_eq!(
            validate_asset_type("compressor").unwrap(),
            AssetType::Compressor
        );
        assert_eq!(validate_asset_type("chiller").unwrap(), AssetType::Chiller);
        assert_eq!(
            validate_asset_type("rolling mill").unwrap(),
            AssetType::RollingMill
        );
    }

    #[test]
    fn rejects_unknown_or_differently_cased_type() {
        assert_matches!(validate_asset_type("eau"), Err(CoreError::InvalidType(t)) if t == "eau");
        assert_matches!(
            validate_asset_type("FURNACE"),
            Err(CoreError::InvalidType(_))
        );
        assert_matches!(validate_asset_type(""), Err(CoreError::InvalidType(_)));
    }

    #[test]
    fn capacity_allows_exact_fill() {
        assert!(validate_capacity([60, 30], 10, 100, 0).is_ok());
    }

    #[test]
    fn capacity_rejects_one_over() {
        assert_matches!(
            validate_capacity([99], 2, 100, 0),
            Err(CoreError::CapacityExceeded {
                requested: 101,
                max_power: 100
            })
        );
    }

    #[test]
    fn capacity_excludes_old_power_on_update() {
        // Asset at 10 moves to 67 beside a sibling at 40: 40 + 67 = 107.
        assert_matches!(
            validate_capacity([40, 10], 67, 100, 10),
            Err(CoreError::CapacityExceeded { requested: 107, .. })
        );
        // Moving the same asset to 60 fits exactly.
        assert!(validate_capacity([40, 10], 60, 100, 10).is_ok());
    }

    #[test]
    fn capacity_with_no_assets_checks_candidate_alone() {
        let none: Vec<Power> = Vec::new();
        assert!(validate_capacity(none.clone(), 0, 0, 0).is_ok());
        assert!(validate_capacity(none.clone(), 50, 50, 0).is_ok());
        assert!(validate_capacity(none, 51, 50, 0).is_err());
    }

    #[test]
    fn capacity_shrinking_plant_below_committed_total_fails() {
        assert_matches!(
            validate_capacity([30, 30], 0, 59, 0),
            Err(CoreError::CapacityExceeded { requested: 60, .. })
        );
    }

    #[test]
    fn capacity_does_not_overflow() {
        assert!(validate_capacity([i64::MAX, i64::MAX], 0, i64::MAX, 0).is_err());
    }

    #[test]
    fn owner_lookup_miss_is_invalid_reference() {
        assert_matches!(
            validate_owner_exists::<()>("EnergyManager", 4, None),
            Err(CoreError::InvalidReference {
                entity: "EnergyManager",
                id: 4
            })
        );
        assert_eq!(validate_owner_exists("EnergyManager", 4, Some(9)).unwrap(), 9);
    }

    #[test]
    fn input_rules_reject_blank_name_and_negative_power() {
        let input = CreatePlant {
            name: String::new(),
            address: "1 Quay".to_string(),
            max_power: -1,
            energy_manager_id: 1,
        };
        assert_matches!(validate_input(&input), Err(CoreError::Validation(_)));
    }
}
