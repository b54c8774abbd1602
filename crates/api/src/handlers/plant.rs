//! Handlers for the `/plants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plant_core::models::{CreatePlant, Plant, UpdatePlant};
use plant_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/plants
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Plant>>>> {
    let plants = state.service.list_plants().await?;
    Ok(Json(DataResponse { data: plants }))
}

/// POST /api/v1/plants
///
/// Fails with 422 if `energy_manager_id` names no existing manager.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlant>,
) -> AppResult<(StatusCode, Json<DataResponse<Plant>>)> {
    let plant = state.service.create_plant(&input).await?;
    tracing::info!(plant_id = plant.id, max_power = plant.max_power, "Plant created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: plant })))
}

/// GET /api/v1/plants/{plant_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Plant>>> {
    let plant = state.service.get_plant(id).await?;
    Ok(Json(DataResponse { data: plant }))
}

/// PUT /api/v1/plants/{plant_id}
///
/// Rejected with 409 if the new `max_power` is below the power already
/// committed to the plant's assets.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlant>,
) -> AppResult<Json<DataResponse<Plant>>> {
    let plant = state.service.update_plant(id, &input).await?;
    Ok(Json(DataResponse { data: plant }))
}

/// DELETE /api/v1/plants/{plant_id}
///
/// Deletes the plant's assets with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.service.delete_plant(id).await?;
    tracing::info!(plant_id = id, "Plant deleted");
    Ok(StatusCode::NO_CONTENT)
}
