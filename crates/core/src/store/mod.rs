//! Entity store contract.
//!
//! The hierarchy service reaches persistence only through [`EntityStore`].
//! Implementations are passive: they never enforce hierarchy rules beyond
//! the cascade from a plant to its assets.

pub mod memory;

use async_trait::async_trait;

use crate::models::{
    Asset, CreateEnergyManager, CreatePlant, EnergyManager, NewAsset, Plant,
};
use crate::types::DbId;

pub use memory::MemoryStore;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Opaque failure from the backing store (I/O, driver, pool exhaustion).
///
/// The core never inspects it; the effect of the failed call is unknown and
/// must be treated as not applied.
#[derive(Debug, thiserror::Error)]
#[error("Store failure: {message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl StoreError {
    /// A failure described only by a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap a driver error, keeping it as the error source.
    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Persistence operations consumed by the hierarchy service.
///
/// `find_*` return `None` when nothing matches, `delete_*` return `false`
/// when nothing was removed, and `update_*` return `None` when the row has
/// disappeared. Listings are ordered by id so repeated reads are identical.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Cheap liveness probe used by health checks.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    // --- Energy managers ---

    async fn find_manager(&self, id: DbId) -> Result<Option<EnergyManager>, StoreError>;

    async fn list_managers(&self) -> Result<Vec<EnergyManager>, StoreError>;

    async fn insert_manager(
        &self,
        input: &CreateEnergyManager,
    ) -> Result<EnergyManager, StoreError>;

    async fn update_manager(
        &self,
        manager: &EnergyManager,
    ) -> Result<Option<EnergyManager>, StoreError>;

    /// Remove the manager only. Plants keep their (now dangling) reference.
    async fn delete_manager(&self, id: DbId) -> Result<bool, StoreError>;

    /// Remove the manager and clear `energy_manager_id` on its plants, atomically.
    async fn delete_manager_detaching_plants(&self, id: DbId) -> Result<bool, StoreError>;

    // --- Plants ---

    async fn list_plants_by_manager(&self, manager_id: DbId) -> Result<Vec<Plant>, StoreError>;

    async fn find_plant(&self, id: DbId) -> Result<Option<Plant>, StoreError>;

    async fn list_plants(&self) -> Result<Vec<Plant>, StoreError>;

    async fn insert_plant(&self, input: &CreatePlant) -> Result<Plant, StoreError>;

    async fn update_plant(&self, plant: &Plant) -> Result<Option<Plant>, StoreError>;

    /// Remove the plant together with all of its assets, atomically.
    async fn delete_plant(&self, id: DbId) -> Result<bool, StoreError>;

    // --- Assets ---

    async fn list_assets_by_plant(&self, plant_id: DbId) -> Result<Vec<Asset>, StoreError>;

    async fn find_asset_in_plant(
        &self,
        plant_id: DbId,
        asset_id: DbId,
    ) -> Result<Option<Asset>, StoreError>;

    async fn insert_asset(&self, input: &NewAsset) -> Result<Asset, StoreError>;

    /// Persist name, power and type. `plant_id` is never rewritten.
    async fn update_asset(&self, asset: &Asset) -> Result<Option<Asset>, StoreError>;

    async fn delete_asset(&self, id: DbId) -> Result<bool, StoreError>;
}
