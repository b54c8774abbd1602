//! Repository for the `assets` table.

use plant_core::models::{Asset, NewAsset};
use plant_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::AssetRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, plant_id, name, max_power, asset_type, created_at, updated_at";

/// Provides CRUD operations for assets. Assets are always addressed through
/// their plant when read individually.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAsset) -> Result<AssetRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (plant_id, name, max_power, asset_type)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(input.plant_id)
            .bind(&input.name)
            .bind(input.max_power)
            .bind(input.asset_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an asset by id, only if it belongs to `plant_id`.
    pub async fn find_in_plant(
        pool: &PgPool,
        plant_id: DbId,
        asset_id: DbId,
    ) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1 AND plant_id = $2");
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(asset_id)
            .bind(plant_id)
            .fetch_optional(pool)
            .await
    }

    /// List the assets of a plant, ordered by id.
    pub async fn list_by_plant(pool: &PgPool, plant_id: DbId) -> Result<Vec<AssetRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets
             WHERE plant_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(plant_id)
            .fetch_all(pool)
            .await
    }

    /// Replace name, power and type. `plant_id` is never written.
    pub async fn update(pool: &PgPool, asset: &Asset) -> Result<Option<AssetRow>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                name = $2,
                max_power = $3,
                asset_type = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AssetRow>(&query)
            .bind(asset.id)
            .bind(&asset.name)
            .bind(asset.max_power)
            .bind(asset.asset_type.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete every asset of a plant. Returns the number of rows removed.
    pub async fn delete_by_plant(conn: &mut PgConnection, plant_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE plant_id = $1")
            .bind(plant_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
