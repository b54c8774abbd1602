//! In-memory [`EntityStore`] for tests and local runs without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EntityStore, StoreError};
use crate::models::{
    Asset, CreateEnergyManager, CreatePlant, EnergyManager, NewAsset, Plant,
};
use crate::types::DbId;

#[derive(Default)]
struct Tables {
    managers: BTreeMap<DbId, EnergyManager>,
    plants: BTreeMap<DbId, Plant>,
    assets: BTreeMap<DbId, Asset>,
    next_manager_id: DbId,
    next_plant_id: DbId,
    next_asset_id: DbId,
}

fn next_id(counter: &mut DbId) -> DbId {
    *counter += 1;
    *counter
}

/// Entity store keeping all three tables behind a single lock, so the plant
/// cascade and the manager detach are atomic like their SQL counterparts.
///
/// Ids start at 1 per table and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a [`StoreError`] until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Total number of assets across all plants.
    pub async fn asset_count(&self) -> usize {
        self.tables.read().await.assets.len()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::new("memory store is unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }

    async fn find_manager(&self, id: DbId) -> Result<Option<EnergyManager>, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.managers.get(&id).cloned())
    }

    async fn list_managers(&self) -> Result<Vec<EnergyManager>, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.managers.values().cloned().collect())
    }

    async fn insert_manager(
        &self,
        input: &CreateEnergyManager,
    ) -> Result<EnergyManager, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let manager = EnergyManager {
            id: next_id(&mut tables.next_manager_id),
            name: input.name.clone(),
            surname: input.surname.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.managers.insert(manager.id, manager.clone());
        Ok(manager)
    }

    async fn update_manager(
        &self,
        manager: &EnergyManager,
    ) -> Result<Option<EnergyManager>, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let Some(stored) = tables.managers.get_mut(&manager.id) else {
            return Ok(None);
        };
        stored.name = manager.name.clone();
        stored.surname = manager.surname.clone();
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete_manager(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.tables.write().await.managers.remove(&id).is_some())
    }

    async fn delete_manager_detaching_plants(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.managers.remove(&id).is_none() {
            return Ok(false);
        }
        let now = Utc::now();
        for plant in tables.plants.values_mut() {
            if plant.energy_manager_id == Some(id) {
                plant.energy_manager_id = None;
                plant.updated_at = now;
            }
        }
        Ok(true)
    }

    async fn list_plants_by_manager(&self, manager_id: DbId) -> Result<Vec<Plant>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .plants
            .values()
            .filter(|p| p.energy_manager_id == Some(manager_id))
            .cloned()
            .collect())
    }

    async fn find_plant(&self, id: DbId) -> Result<Option<Plant>, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.plants.get(&id).cloned())
    }

    async fn list_plants(&self) -> Result<Vec<Plant>, StoreError> {
        self.check_available()?;
        Ok(self.tables.read().await.plants.values().cloned().collect())
    }

    async fn insert_plant(&self, input: &CreatePlant) -> Result<Plant, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let plant = Plant {
            id: next_id(&mut tables.next_plant_id),
            name: input.name.clone(),
            address: input.address.clone(),
            max_power: input.max_power,
            energy_manager_id: Some(input.energy_manager_id),
            created_at: now,
            updated_at: now,
        };
        tables.plants.insert(plant.id, plant.clone());
        Ok(plant)
    }

    async fn update_plant(&self, plant: &Plant) -> Result<Option<Plant>, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let Some(stored) = tables.plants.get_mut(&plant.id) else {
            return Ok(None);
        };
        stored.name = plant.name.clone();
        stored.address = plant.address.clone();
        stored.max_power = plant.max_power;
        stored.energy_manager_id = plant.energy_manager_id;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete_plant(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        if tables.plants.remove(&id).is_none() {
            return Ok(false);
        }
        tables.assets.retain(|_, asset| asset.plant_id != id);
        Ok(true)
    }

    async fn list_assets_by_plant(&self, plant_id: DbId) -> Result<Vec<Asset>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .assets
            .values()
            .filter(|a| a.plant_id == plant_id)
            .cloned()
            .collect())
    }

    async fn find_asset_in_plant(
        &self,
        plant_id: DbId,
        asset_id: DbId,
    ) -> Result<Option<Asset>, StoreError> {
        self.check_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .assets
            .get(&asset_id)
            .filter(|a| a.plant_id == plant_id)
            .cloned())
    }

    async fn insert_asset(&self, input: &NewAsset) -> Result<Asset, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let asset = Asset {
            id: next_id(&mut tables.next_asset_id),
            plant_id: input.plant_id,
            name: input.name.clone(),
            max_power: input.max_power,
            asset_type: input.asset_type,
            created_at: now,
            updated_at: now,
        };
        tables.assets.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn update_asset(&self, asset: &Asset) -> Result<Option<Asset>, StoreError> {
        self.check_available()?;
        let mut tables = self.tables.write().await;
        let Some(stored) = tables.assets.get_mut(&asset.id) else {
            return Ok(None);
        };
        stored.name = asset.name.clone();
        stored.max_power = asset.max_power;
        stored.asset_type = asset.asset_type;
        stored.updated_at = Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete_asset(&self, id: DbId) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.tables.write().await.assets.remove(&id).is_some())
    }
}
