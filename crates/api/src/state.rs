use std::sync::Arc;

use plant_core::hierarchy::HierarchyService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the service shares its store and plant locks.
#[derive(Clone)]
pub struct AppState {
    /// The hierarchy service, sole mutator of managers, plants and assets.
    pub service: HierarchyService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
