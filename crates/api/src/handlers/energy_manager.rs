//! Handlers for the `/energy-managers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plant_core::models::{CreateEnergyManager, EnergyManager, Plant, UpdateEnergyManager};
use plant_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/energy-managers
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<EnergyManager>>>> {
    let managers = state.service.list_energy_managers().await?;
    Ok(Json(DataResponse { data: managers }))
}

/// POST /api/v1/energy-managers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEnergyManager>,
) -> AppResult<(StatusCode, Json<DataResponse<EnergyManager>>)> {
    let manager = state.service.create_energy_manager(&input).await?;
    tracing::info!(energy_manager_id = manager.id, "Energy manager created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: manager })))
}

/// GET /api/v1/energy-managers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<EnergyManager>>> {
    let manager = state.service.get_energy_manager(id).await?;
    Ok(Json(DataResponse { data: manager }))
}

/// PUT /api/v1/energy-managers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEnergyManager>,
) -> AppResult<Json<DataResponse<EnergyManager>>> {
    let manager = state.service.update_energy_manager(id, &input).await?;
    Ok(Json(DataResponse { data: manager }))
}

/// DELETE /api/v1/energy-managers/{id}
///
/// What happens to the manager's plants depends on the configured
/// delete policy.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.service.delete_energy_manager(id).await?;
    tracing::info!(
        energy_manager_id = id,
        policy = %state.config.manager_delete_policy,
        "Energy manager deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/energy-managers/{id}/plants
pub async fn list_plants(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Plant>>>> {
    let plants = state.service.get_energy_manager_plants(id).await?;
    Ok(Json(DataResponse { data: plants }))
}
