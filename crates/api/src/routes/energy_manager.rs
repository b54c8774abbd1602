use axum::routing::get;
use axum::Router;

use crate::handlers::energy_manager;
use crate::state::AppState;

/// Routes mounted at `/energy-managers`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/plants      -> list_plants
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(energy_manager::list).post(energy_manager::create))
        .route(
            "/{id}",
            get(energy_manager::get_by_id)
                .put(energy_manager::update)
                .delete(energy_manager::delete),
        )
        .route("/{id}/plants", get(energy_manager::list_plants))
}
