//! Repository for the `energy_managers` table.

use plant_core::models::CreateEnergyManager;
use plant_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::EnergyManagerRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, surname, created_at, updated_at";

/// Provides CRUD operations for energy managers.
pub struct EnergyManagerRepo;

impl EnergyManagerRepo {
    /// Insert a new energy manager, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEnergyManager,
    ) -> Result<EnergyManagerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO energy_managers (name, surname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EnergyManagerRow>(&query)
            .bind(&input.name)
            .bind(&input.surname)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EnergyManagerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM energy_managers WHERE id = $1");
        sqlx::query_as::<_, EnergyManagerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all energy managers, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<EnergyManagerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM energy_managers ORDER BY id ASC");
        sqlx::query_as::<_, EnergyManagerRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Replace name and surname. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        name: &str,
        surname: &str,
    ) -> Result<Option<EnergyManagerRow>, sqlx::Error> {
        let query = format!(
            "UPDATE energy_managers SET
                name = $2,
                surname = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EnergyManagerRow>(&query)
            .bind(id)
            .bind(name)
            .bind(surname)
            .fetch_optional(pool)
            .await
    }

    /// Delete an energy manager by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM energy_managers WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
