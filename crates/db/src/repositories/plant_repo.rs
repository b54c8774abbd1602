//! Repository for the `plants` table.

use plant_core::models::{CreatePlant, Plant};
use plant_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::PlantRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, max_power, energy_manager_id, created_at, updated_at";

/// Provides CRUD operations for plants.
pub struct PlantRepo;

impl PlantRepo {
    /// Insert a new plant, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePlant) -> Result<PlantRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO plants (name, address, max_power, energy_manager_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlantRow>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(input.max_power)
            .bind(input.energy_manager_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PlantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants WHERE id = $1");
        sqlx::query_as::<_, PlantRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all plants, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<PlantRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plants ORDER BY id ASC");
        sqlx::query_as::<_, PlantRow>(&query).fetch_all(pool).await
    }

    /// List the plants referencing an energy manager, ordered by id.
    pub async fn list_by_energy_manager(
        pool: &PgPool,
        energy_manager_id: DbId,
    ) -> Result<Vec<PlantRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM plants
             WHERE energy_manager_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, PlantRow>(&query)
            .bind(energy_manager_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field. Returns `None` if no row with the id exists.
    pub async fn update(pool: &PgPool, plant: &Plant) -> Result<Option<PlantRow>, sqlx::Error> {
        let query = format!(
            "UPDATE plants SET
                name = $2,
                address = $3,
                max_power = $4,
                energy_manager_id = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlantRow>(&query)
            .bind(plant.id)
            .bind(&plant.name)
            .bind(&plant.address)
            .bind(plant.max_power)
            .bind(plant.energy_manager_id)
            .fetch_optional(pool)
            .await
    }

    /// Clear the manager reference on every plant of `energy_manager_id`.
    /// Returns the number of plants detached.
    pub async fn detach_from_energy_manager(
        conn: &mut PgConnection,
        energy_manager_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE plants SET energy_manager_id = NULL, updated_at = NOW()
             WHERE energy_manager_id = $1",
        )
        .bind(energy_manager_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a plant by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM plants WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
