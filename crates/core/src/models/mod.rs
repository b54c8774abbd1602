//! Entity model and input DTOs for the three-level hierarchy.
//!
//! Entities are what the store hands back; `Create*`/`Update*` DTOs are what
//! callers hand in. DTOs carry their own field-level rules via
//! [`validator::Validate`].

pub mod asset;
pub mod energy_manager;
pub mod plant;

pub use asset::{Asset, AssetType, CreateAsset, NewAsset, UpdateAsset};
pub use energy_manager::{CreateEnergyManager, EnergyManager, UpdateEnergyManager};
pub use plant::{CreatePlant, Plant, UpdatePlant};
