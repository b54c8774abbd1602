//! Row types mapped from the hierarchy tables.
//!
//! Each row converts into the matching `plant_core` entity; the core never
//! sees sqlx types.

pub mod asset;
pub mod energy_manager;
pub mod plant;

pub use asset::AssetRow;
pub use energy_manager::EnergyManagerRow;
pub use plant::PlantRow;
