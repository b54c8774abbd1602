use axum::extract::State;
use axum::{routing::get, Json, Router};
use plant_core::hierarchy::ManagerDeletePolicy;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the entity store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    /// The configured behaviour of `DELETE /energy-managers/{id}`.
    pub manager_delete_policy: ManagerDeletePolicy,
}

/// GET /health
///
/// Always answers 200 so the process stays routable while the store is
/// down; callers read `status` to tell the two apart.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.service.store_healthy().await;

    Json(HealthResponse {
        status: if store_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy,
        manager_delete_policy: state.config.manager_delete_policy,
    })
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
