pub mod energy_manager;
pub mod health;
pub mod plant;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /energy-managers                          list, create
/// /energy-managers/{id}                     get, update, delete
/// /energy-managers/{id}/plants              plants owned by the manager
///
/// /plants                                   list, create
/// /plants/{plant_id}                        get, update, delete (cascades)
/// /plants/{plant_id}/assets                 list, create
/// /plants/{plant_id}/assets/{asset_id}      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/energy-managers", energy_manager::router())
        .nest("/plants", plant::router())
}
