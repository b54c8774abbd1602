use crate::store::StoreError;
use crate::types::{DbId, Power};

/// Every way a hierarchy operation can be rejected.
///
/// All variants except [`CoreError::Store`] are deterministic rejections of
/// the caller's input and must not be retried.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The subject of the operation does not exist (by id, or by id + owner).
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A foreign key names an entity that does not exist.
    #[error("Invalid reference: {entity} with id {id} does not exist")]
    InvalidReference { entity: &'static str, id: DbId },

    /// The change would push the committed asset power above the plant's budget.
    #[error("Capacity exceeded: total asset power {requested} is above plant maximum {max_power}")]
    CapacityExceeded { requested: i128, max_power: Power },

    /// The asset type is not one of the fixed enumeration.
    #[error(
        "Invalid asset type '{0}': must be one of 'furnace', 'compressor', 'chiller' or 'rolling mill'"
    )]
    InvalidType(String),

    /// Malformed input (empty names, negative powers).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The energy manager still owns plants and the delete policy forbids removal.
    #[error("Energy manager {id} still owns {plants} plant(s)")]
    ManagerInUse { id: DbId, plants: usize },

    /// Opaque failure from the entity store, passed through unclassified.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = CoreError::NotFound {
            entity: "Plant",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Plant with id 7");
    }

    #[test]
    fn display_capacity_exceeded() {
        let err = CoreError::CapacityExceeded {
            requested: 107,
            max_power: 100,
        };
        assert_eq!(
            err.to_string(),
            "Capacity exceeded: total asset power 107 is above plant maximum 100"
        );
    }

    #[test]
    fn store_error_is_transparent() {
        let err = CoreError::from(StoreError::new("connection reset"));
        assert_eq!(err.to_string(), "Store failure: connection reset");
    }
}
