#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use plant_core::hierarchy::{HierarchyService, ManagerDeletePolicy};
use plant_core::store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

use plant_api::config::ServerConfig;
use plant_api::router::build_app_router;
use plant_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        manager_delete_policy: ManagerDeletePolicy::default(),
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The store handle is returned so tests can inspect it or simulate an
/// outage with [`MemoryStore::set_unavailable`].
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    build_test_app_with_policy(ManagerDeletePolicy::default())
}

pub fn build_test_app_with_policy(policy: ManagerDeletePolicy) -> (Router, Arc<MemoryStore>) {
    let config = ServerConfig {
        manager_delete_policy: policy,
        ..test_config()
    };
    let store = Arc::new(MemoryStore::new());
    let service = HierarchyService::new(store.clone()).with_manager_delete_policy(policy);
    let state = AppState {
        service,
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create an energy manager and return its id.
pub async fn create_manager(app: &Router) -> i64 {
    let response = post_json(
        app,
        "/api/v1/energy-managers",
        serde_json::json!({"name": "Grace", "surname": "Hopper"}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a plant with the given budget under `manager_id` and return its id.
pub async fn create_plant(app: &Router, manager_id: i64, max_power: i64) -> i64 {
    let response = post_json(
        app,
        "/api/v1/plants",
        serde_json::json!({
            "name": "Riverside",
            "address": "4 Canal Street",
            "max_power": max_power,
            "energy_manager_id": manager_id,
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// POST an asset under `plant_id`, returning the raw response.
pub async fn post_asset(app: &Router, plant_id: i64, asset_type: &str, max_power: i64) -> Response<Body> {
    post_json(
        app,
        &format!("/api/v1/plants/{plant_id}/assets"),
        serde_json::json!({
            "name": format!("{asset_type} unit"),
            "max_power": max_power,
            "type": asset_type,
        }),
    )
    .await
}
