//! Route definitions for plants and their nested assets.

use axum::routing::get;
use axum::Router;

use crate::handlers::{asset, plant};
use crate::state::AppState;

/// Routes mounted at `/plants`.
///
/// ```text
/// GET    /                                -> list
/// POST   /                                -> create
/// GET    /{plant_id}                      -> get_by_id
/// PUT    /{plant_id}                      -> update
/// DELETE /{plant_id}                      -> delete
///
/// GET    /{plant_id}/assets               -> list_by_plant
/// POST   /{plant_id}/assets               -> create
/// GET    /{plant_id}/assets/{asset_id}    -> get_by_id
/// PUT    /{plant_id}/assets/{asset_id}    -> update
/// DELETE /{plant_id}/assets/{asset_id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plant::list).post(plant::create))
        .route(
            "/{plant_id}",
            get(plant::get_by_id)
                .put(plant::update)
                .delete(plant::delete),
        )
        .route(
            "/{plant_id}/assets",
            get(asset::list_by_plant).post(asset::create),
        )
        .route(
            "/{plant_id}/assets/{asset_id}",
            get(asset::get_by_id)
                .put(asset::update)
                .delete(asset::delete),
        )
}
