//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods that must run inside
//! a caller's transaction take `&mut PgConnection` instead.

pub mod asset_repo;
pub mod energy_manager_repo;
pub mod plant_repo;

pub use asset_repo::AssetRepo;
pub use energy_manager_repo::EnergyManagerRepo;
pub use plant_repo::PlantRepo;
