//! Handlers for assets, nested under plants:
//! `/plants/{plant_id}/assets[/{asset_id}]`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use plant_core::models::{Asset, CreateAsset, UpdateAsset};
use plant_core::types::DbId;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/plants/{plant_id}/assets
pub async fn list_by_plant(
    State(state): State<AppState>,
    Path(plant_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Asset>>>> {
    let assets = state.service.get_plant_assets(plant_id).await?;
    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/plants/{plant_id}/assets
pub async fn create(
    State(state): State<AppState>,
    Path(plant_id): Path<DbId>,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<DataResponse<Asset>>)> {
    let asset = state.service.create_asset(plant_id, &input).await?;
    tracing::info!(
        plant_id,
        asset_id = asset.id,
        max_power = asset.max_power,
        "Asset created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/plants/{plant_id}/assets/{asset_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((plant_id, asset_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = state.service.get_plant_asset(plant_id, asset_id).await?;
    Ok(Json(DataResponse { data: asset }))
}

/// PUT /api/v1/plants/{plant_id}/assets/{asset_id}
pub async fn update(
    State(state): State<AppState>,
    Path((plant_id, asset_id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<DataResponse<Asset>>> {
    let asset = state
        .service
        .update_asset(plant_id, asset_id, &input)
        .await?;
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/plants/{plant_id}/assets/{asset_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((plant_id, asset_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    state.service.delete_asset(plant_id, asset_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
