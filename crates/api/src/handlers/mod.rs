pub mod asset;
pub mod energy_manager;
pub mod plant;
