//! [`EntityStore`] backed by PostgreSQL.

use async_trait::async_trait;
use plant_core::models::{
    Asset, CreateEnergyManager, CreatePlant, EnergyManager, NewAsset, Plant,
};
use plant_core::store::{EntityStore, StoreError};
use plant_core::types::DbId;

use crate::models::{AssetRow, EnergyManagerRow, PlantRow};
use crate::repositories::{AssetRepo, EnergyManagerRepo, PlantRepo};
use crate::DbPool;

/// Map a driver error into the core's opaque store failure, logging it once here.
fn store_error(err: sqlx::Error) -> StoreError {
    tracing::error!(error = %err, "Entity store query failed");
    StoreError::other(err)
}

fn assets_from_rows(rows: Vec<AssetRow>) -> Result<Vec<Asset>, StoreError> {
    rows.into_iter().map(Asset::try_from).collect()
}

/// Postgres-backed entity store. Cheap to clone (wraps the pool).
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(store_error)
    }

    async fn find_manager(&self, id: DbId) -> Result<Option<EnergyManager>, StoreError> {
        let row = EnergyManagerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(row.map(EnergyManager::from))
    }

    async fn list_managers(&self) -> Result<Vec<EnergyManager>, StoreError> {
        let rows = EnergyManagerRepo::list(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(EnergyManager::from).collect())
    }

    async fn insert_manager(
        &self,
        input: &CreateEnergyManager,
    ) -> Result<EnergyManager, StoreError> {
        let row: EnergyManagerRow = EnergyManagerRepo::create(&self.pool, input)
            .await
            .map_err(store_error)?;
        Ok(row.into())
    }

    async fn update_manager(
        &self,
        manager: &EnergyManager,
    ) -> Result<Option<EnergyManager>, StoreError> {
        let row = EnergyManagerRepo::update(&self.pool, manager.id, &manager.name, &manager.surname)
            .await
            .map_err(store_error)?;
        Ok(row.map(EnergyManager::from))
    }

    async fn delete_manager(&self, id: DbId) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await.map_err(store_error)?;
        EnergyManagerRepo::delete(&mut conn, id)
            .await
            .map_err(store_error)
    }

    async fn delete_manager_detaching_plants(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await.map_err(store_error)?;

        let deleted = EnergyManagerRepo::delete(&mut tx, id)
            .await
            .map_err(store_error)?;
        if !deleted {
            // Dropping the transaction rolls it back.
            return Ok(false);
        }
        let detached = PlantRepo::detach_from_energy_manager(&mut tx, id)
            .await
            .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;
        tracing::debug!(energy_manager_id = id, detached, "Energy manager deleted, plants detached");
        Ok(true)
    }

    async fn list_plants_by_manager(&self, manager_id: DbId) -> Result<Vec<Plant>, StoreError> {
        let rows = PlantRepo::list_by_energy_manager(&self.pool, manager_id)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(Plant::from).collect())
    }

    async fn find_plant(&self, id: DbId) -> Result<Option<Plant>, StoreError> {
        let row = PlantRepo::find_by_id(&self.pool, id)
            .await
            .map_err(store_error)?;
        Ok(row.map(Plant::from))
    }

    async fn list_plants(&self) -> Result<Vec<Plant>, StoreError> {
        let rows = PlantRepo::list(&self.pool).await.map_err(store_error)?;
        Ok(rows.into_iter().map(Plant::from).collect())
    }

    async fn insert_plant(&self, input: &CreatePlant) -> Result<Plant, StoreError> {
        let row: PlantRow = PlantRepo::create(&self.pool, input)
            .await
            .map_err(store_error)?;
        Ok(row.into())
    }

    async fn update_plant(&self, plant: &Plant) -> Result<Option<Plant>, StoreError> {
        let row = PlantRepo::update(&self.pool, plant)
            .await
            .map_err(store_error)?;
        Ok(row.map(Plant::from))
    }

    async fn delete_plant(&self, id: DbId) -> Result<bool, StoreError> {
        // Assets first, then the plant, in one transaction.
        let mut tx = self.pool.begin().await.map_err(store_error)?;

        let removed_assets = AssetRepo::delete_by_plant(&mut tx, id)
            .await
            .map_err(store_error)?;
        let deleted = PlantRepo::delete(&mut tx, id)
            .await
            .map_err(store_error)?;
        if !deleted {
            return Ok(false);
        }

        tx.commit().await.map_err(store_error)?;
        tracing::debug!(plant_id = id, removed_assets, "Plant deleted with its assets");
        Ok(true)
    }

    async fn list_assets_by_plant(&self, plant_id: DbId) -> Result<Vec<Asset>, StoreError> {
        let rows = AssetRepo::list_by_plant(&self.pool, plant_id)
            .await
            .map_err(store_error)?;
        assets_from_rows(rows)
    }

    async fn find_asset_in_plant(
        &self,
        plant_id: DbId,
        asset_id: DbId,
    ) -> Result<Option<Asset>, StoreError> {
        AssetRepo::find_in_plant(&self.pool, plant_id, asset_id)
            .await
            .map_err(store_error)?
            .map(Asset::try_from)
            .transpose()
    }

    async fn insert_asset(&self, input: &NewAsset) -> Result<Asset, StoreError> {
        let row = AssetRepo::create(&self.pool, input)
            .await
            .map_err(store_error)?;
        Asset::try_from(row)
    }

    async fn update_asset(&self, asset: &Asset) -> Result<Option<Asset>, StoreError> {
        AssetRepo::update(&self.pool, asset)
            .await
            .map_err(store_error)?
            .map(Asset::try_from)
            .transpose()
    }

    async fn delete_asset(&self, id: DbId) -> Result<bool, StoreError> {
        AssetRepo::delete(&self.pool, id)
            .await
            .map_err(store_error)
    }
}
