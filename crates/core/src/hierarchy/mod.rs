//! Hierarchy service: one operation per use case.
//!
//! Every mutation follows the same shape: read the prerequisite state from
//! the store, run the checks in [`crate::validation`], then write or reject.
//! Operations that can change a plant's committed power (asset writes,
//! plant capacity updates, plant deletion) run under that plant's lock, so
//! two concurrent writers can never both pass the capacity check against
//! the same stale sibling sum. Plant writes that reference a manager and
//! the deletion of that manager run under the manager's lock, so a plant
//! can never be attached to a manager that is being deleted.
//!
//! Lock order is plant before manager.

mod locks;
mod policy;

use std::sync::Arc;

pub use locks::{KeyedGuard, KeyedLocks};
pub use policy::{ManagerDeletePolicy, UnknownPolicy};

use crate::error::CoreError;
use crate::models::{
    Asset, CreateAsset, CreateEnergyManager, CreatePlant, EnergyManager, NewAsset, Plant,
    UpdateAsset, UpdateEnergyManager, UpdatePlant,
};
use crate::store::EntityStore;
use crate::types::DbId;
use crate::validation::{
    validate_asset_type, validate_capacity, validate_input, validate_owner_exists,
};

const ENERGY_MANAGER: &str = "EnergyManager";
const PLANT: &str = "Plant";
const ASSET: &str = "Asset";

/// Sole mutator of energy managers, plants and assets.
///
/// Cheap to clone; clones share the store and the locks.
#[derive(Clone)]
pub struct HierarchyService {
    store: Arc<dyn EntityStore>,
    plant_locks: KeyedLocks,
    manager_locks: KeyedLocks,
    manager_delete_policy: ManagerDeletePolicy,
}

impl HierarchyService {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            store,
            plant_locks: KeyedLocks::new(),
            manager_locks: KeyedLocks::new(),
            manager_delete_policy: ManagerDeletePolicy::default(),
        }
    }

    pub fn with_manager_delete_policy(mut self, policy: ManagerDeletePolicy) -> Self {
        self.manager_delete_policy = policy;
        self
    }

    /// Whether the backing store currently answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }

    // -----------------------------------------------------------------------
    // Energy managers
    // -----------------------------------------------------------------------

    pub async fn list_energy_managers(&self) -> Result<Vec<EnergyManager>, CoreError> {
        Ok(self.store.list_managers().await?)
    }

    pub async fn create_energy_manager(
        &self,
        input: &CreateEnergyManager,
    ) -> Result<EnergyManager, CoreError> {
        validate_input(input)?;
        Ok(self.store.insert_manager(input).await?)
    }

    pub async fn get_energy_manager(&self, id: DbId) -> Result<EnergyManager, CoreError> {
        self.store
            .find_manager(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENERGY_MANAGER,
                id,
            })
    }

    pub async fn update_energy_manager(
        &self,
        id: DbId,
        input: &UpdateEnergyManager,
    ) -> Result<EnergyManager, CoreError> {
        validate_input(input)?;
        let mut manager = self.get_energy_manager(id).await?;
        manager.name.clone_from(&input.name);
        manager.surname.clone_from(&input.surname);
        self.store
            .update_manager(&manager)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ENERGY_MANAGER,
                id,
            })
    }

    /// Delete a manager according to the configured [`ManagerDeletePolicy`].
    ///
    /// Plants are never deleted with their manager.
    pub async fn delete_energy_manager(&self, id: DbId) -> Result<(), CoreError> {
        let _guard = self.manager_locks.lock(id).await;
        let deleted = match self.manager_delete_policy {
            ManagerDeletePolicy::LeaveDangling => self.store.delete_manager(id).await?,
            ManagerDeletePolicy::Detach => self.store.delete_manager_detaching_plants(id).await?,
            ManagerDeletePolicy::Restrict => {
                self.get_energy_manager(id).await?;
                let owned = self.store.list_plants_by_manager(id).await?;
                if !owned.is_empty() {
                    return Err(CoreError::ManagerInUse {
                        id,
                        plants: owned.len(),
                    });
                }
                self.store.delete_manager(id).await?
            }
        };

        if deleted {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: ENERGY_MANAGER,
                id,
            })
        }
    }

    /// Plants owned by an existing manager. An empty list is not an error.
    pub async fn get_energy_manager_plants(&self, id: DbId) -> Result<Vec<Plant>, CoreError> {
        self.get_energy_manager(id).await?;
        Ok(self.store.list_plants_by_manager(id).await?)
    }

    // -----------------------------------------------------------------------
    // Plants
    // -----------------------------------------------------------------------

    pub async fn list_plants(&self) -> Result<Vec<Plant>, CoreError> {
        Ok(self.store.list_plants().await?)
    }

    /// Create a plant with no assets under an existing manager.
    ///
    /// A missing manager yields [`CoreError::InvalidReference`] and nothing
    /// is written.
    pub async fn create_plant(&self, input: &CreatePlant) -> Result<Plant, CoreError> {
        validate_input(input)?;
        let _guard = self.manager_locks.lock(input.energy_manager_id).await;

        let manager = self.store.find_manager(input.energy_manager_id).await?;
        validate_owner_exists(ENERGY_MANAGER, input.energy_manager_id, manager)?;
        Ok(self.store.insert_plant(input).await?)
    }

    pub async fn get_plant(&self, id: DbId) -> Result<Plant, CoreError> {
        self.store
            .find_plant(id)
            .await?
            .ok_or(CoreError::NotFound { entity: PLANT, id })
    }

    /// Replace a plant's fields.
    ///
    /// The new ceiling must still cover the already-committed asset total
    /// and the new manager must exist. Nothing is written unless both hold.
    pub async fn update_plant(&self, id: DbId, input: &UpdatePlant) -> Result<Plant, CoreError> {
        validate_input(input)?;
        let _guard = self.plant_locks.lock(id).await;

        let mut plant = self.get_plant(id).await?;
        let assets = self.store.list_assets_by_plant(id).await?;
        validate_capacity(assets.iter().map(|a| a.max_power), 0, input.max_power, 0)?;

        let _manager_guard = self.manager_locks.lock(input.energy_manager_id).await;
        let manager = self.store.find_manager(input.energy_manager_id).await?;
        validate_owner_exists(ENERGY_MANAGER, input.energy_manager_id, manager)?;

        plant.name.clone_from(&input.name);
        plant.address.clone_from(&input.address);
        plant.max_power = input.max_power;
        plant.energy_manager_id = Some(input.energy_manager_id);

        self.store
            .update_plant(&plant)
            .await?
            .ok_or(CoreError::NotFound { entity: PLANT, id })
    }

    /// Delete a plant and, atomically with it, all of its assets.
    pub async fn delete_plant(&self, id: DbId) -> Result<(), CoreError> {
        let _guard = self.plant_locks.lock(id).await;
        if self.store.delete_plant(id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound { entity: PLANT, id })
        }
    }

    /// Assets of an existing plant. An empty list is not an error.
    pub async fn get_plant_assets(&self, id: DbId) -> Result<Vec<Asset>, CoreError> {
        self.get_plant(id).await?;
        Ok(self.store.list_assets_by_plant(id).await?)
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    /// Create an asset under `plant_id`, provided the plant's budget allows it.
    pub async fn create_asset(
        &self,
        plant_id: DbId,
        input: &CreateAsset,
    ) -> Result<Asset, CoreError> {
        let asset_type = validate_asset_type(&input.asset_type)?;
        validate_input(input)?;
        let _guard = self.plant_locks.lock(plant_id).await;

        let plant = self.get_plant(plant_id).await?;
        let siblings = self.store.list_assets_by_plant(plant_id).await?;
        validate_capacity(
            siblings.iter().map(|a| a.max_power),
            input.max_power,
            plant.max_power,
            0,
        )?;

        let new_asset = NewAsset {
            plant_id,
            name: input.name.clone(),
            max_power: input.max_power,
            asset_type,
        };
        Ok(self.store.insert_asset(&new_asset).await?)
    }

    /// Fetch an asset through its owning plant.
    ///
    /// A missing plant, a missing asset and an asset owned by another plant
    /// all surface as [`CoreError::NotFound`].
    pub async fn get_plant_asset(&self, plant_id: DbId, asset_id: DbId) -> Result<Asset, CoreError> {
        self.get_plant(plant_id).await?;
        self.store
            .find_asset_in_plant(plant_id, asset_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ASSET,
                id: asset_id,
            })
    }

    /// Replace an asset's name, power and type. The asset's old power is
    /// excluded from the sibling sum before the new one is added.
    pub async fn update_asset(
        &self,
        plant_id: DbId,
        asset_id: DbId,
        input: &UpdateAsset,
    ) -> Result<Asset, CoreError> {
        let asset_type = validate_asset_type(&input.asset_type)?;
        validate_input(input)?;
        let _guard = self.plant_locks.lock(plant_id).await;

        let mut asset = self.get_plant_asset(plant_id, asset_id).await?;
        let plant = self.get_plant(plant_id).await?;
        let siblings = self.store.list_assets_by_plant(plant_id).await?;
        validate_capacity(
            siblings.iter().map(|a| a.max_power),
            input.max_power,
            plant.max_power,
            asset.max_power,
        )?;

        asset.name.clone_from(&input.name);
        asset.max_power = input.max_power;
        asset.asset_type = asset_type;

        self.store
            .update_asset(&asset)
            .await?
            .ok_or(CoreError::NotFound {
                entity: ASSET,
                id: asset_id,
            })
    }

    pub async fn delete_asset(&self, plant_id: DbId, asset_id: DbId) -> Result<(), CoreError> {
        let _guard = self.plant_locks.lock(plant_id).await;
        self.get_plant_asset(plant_id, asset_id).await?;

        if self.store.delete_asset(asset_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound {
                entity: ASSET,
                id: asset_id,
            })
        }
    }
}
