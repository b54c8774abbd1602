//! Integration tests for the Postgres entity store.
//!
//! Exercises the repository layer and the hierarchy service against a real
//! database. Requires `DATABASE_URL`; run with `cargo test -- --ignored`.

use std::sync::Arc;

use assert_matches::assert_matches;
use plant_core::error::CoreError;
use plant_core::hierarchy::{HierarchyService, ManagerDeletePolicy};
use plant_core::models::{
    AssetType, CreateAsset, CreateEnergyManager, CreatePlant, NewAsset, UpdatePlant,
};
use plant_core::store::EntityStore;
use plant_db::repositories::AssetRepo;
use plant_db::PgStore;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_manager() -> CreateEnergyManager {
    CreateEnergyManager {
        name: "Emmy".to_string(),
        surname: "Noether".to_string(),
    }
}

fn new_plant(energy_manager_id: i64, max_power: i64) -> CreatePlant {
    CreatePlant {
        name: "Fos".to_string(),
        address: "Quai 3".to_string(),
        max_power,
        energy_manager_id,
    }
}

fn new_asset(plant_id: i64, max_power: i64) -> NewAsset {
    NewAsset {
        plant_id,
        name: "Kiln".to_string(),
        max_power,
        asset_type: AssetType::RollingMill,
    }
}

// ---------------------------------------------------------------------------
// Store contract
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_and_find_round(pool: PgPool) {
    let store = PgStore::new(pool);
    let em = store.insert_manager(&new_manager()).await.unwrap();
    let plant = store.insert_plant(&new_plant(em.id, 100)).await.unwrap();
    let asset = store.insert_asset(&new_asset(plant.id, 40)).await.unwrap();

    assert_eq!(store.find_manager(em.id).await.unwrap().unwrap().surname, "Noether");
    assert_eq!(store.find_plant(plant.id).await.unwrap().unwrap().energy_manager_id, Some(em.id));
    let found = store
        .find_asset_in_plant(plant.id, asset.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.asset_type, AssetType::RollingMill);
    assert!(store
        .find_asset_in_plant(plant.id + 1, asset.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_plant_cascades(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let em = store.insert_manager(&new_manager()).await.unwrap();
    let plant = store.insert_plant(&new_plant(em.id, 100)).await.unwrap();
    for power in [10, 20, 30] {
        store.insert_asset(&new_asset(plant.id, power)).await.unwrap();
    }

    assert!(store.delete_plant(plant.id).await.unwrap());
    assert!(AssetRepo::list_by_plant(&pool, plant.id).await.unwrap().is_empty());
    assert!(store.list_plants().await.unwrap().is_empty());
    assert!(!store.delete_plant(plant.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_manager_delete_leaves_dangling_reference(pool: PgPool) {
    let store = PgStore::new(pool);
    let em = store.insert_manager(&new_manager()).await.unwrap();
    let plant = store.insert_plant(&new_plant(em.id, 100)).await.unwrap();

    assert!(store.delete_manager(em.id).await.unwrap());
    let stored = store.find_plant(plant.id).await.unwrap().unwrap();
    assert_eq!(stored.energy_manager_id, Some(em.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_manager_delete_detaching_plants(pool: PgPool) {
    let store = PgStore::new(pool);
    let em = store.insert_manager(&new_manager()).await.unwrap();
    let plant = store.insert_plant(&new_plant(em.id, 100)).await.unwrap();

    assert!(store.delete_manager_detaching_plants(em.id).await.unwrap());
    assert_eq!(store.find_plant(plant.id).await.unwrap().unwrap().energy_manager_id, None);
    assert!(!store.delete_manager_detaching_plants(em.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_check_constraint_rejects_unknown_type(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let em = store.insert_manager(&new_manager()).await.unwrap();
    let plant = store.insert_plant(&new_plant(em.id, 100)).await.unwrap();

    let result = sqlx::query(
        "INSERT INTO assets (plant_id, name, max_power, asset_type) VALUES ($1, 'x', 1, 'eau')",
    )
    .bind(plant.id)
    .execute(&pool)
    .await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Service over Postgres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_service_enforces_budget(pool: PgPool) {
    let svc = HierarchyService::new(Arc::new(PgStore::new(pool)));
    let em = svc.create_energy_manager(&new_manager()).await.unwrap();
    let plant = svc.create_plant(&new_plant(em.id, 100)).await.unwrap();

    let asset = |power: i64, kind: &str| CreateAsset {
        name: "Unit".to_string(),
        max_power: power,
        asset_type: kind.to_string(),
    };
    svc.create_asset(plant.id, &asset(99, "furnace")).await.unwrap();
    assert_matches!(
        svc.create_asset(plant.id, &asset(2, "compressor")).await,
        Err(CoreError::CapacityExceeded { .. })
    );
    assert_eq!(svc.get_plant_assets(plant.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_service_rejects_missing_manager_on_update(pool: PgPool) {
    let svc = HierarchyService::new(Arc::new(PgStore::new(pool)))
        .with_manager_delete_policy(ManagerDeletePolicy::LeaveDangling);
    let em = svc.create_energy_manager(&new_manager()).await.unwrap();
    let plant = svc.create_plant(&new_plant(em.id, 100)).await.unwrap();

    let result = svc
        .update_plant(
            plant.id,
            &UpdatePlant {
                name: "Fos".to_string(),
                address: "Quai 3".to_string(),
                max_power: 100,
                energy_manager_id: em.id + 1000,
            },
        )
        .await;
    assert_matches!(result, Err(CoreError::InvalidReference { .. }));
    assert_eq!(
        svc.get_plant(plant.id).await.unwrap().energy_manager_id,
        Some(em.id)
    );
}
