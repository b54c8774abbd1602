//! Tests for `AppError` to HTTP response mapping.
//!
//! These call `IntoResponse` directly; no router is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use plant_api::error::AppError;
use plant_core::error::CoreError;
use plant_core::store::StoreError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Plant",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Entity not found: Plant with id 42");
}

#[tokio::test]
async fn invalid_reference_returns_422() {
    let err = AppError::Core(CoreError::InvalidReference {
        entity: "EnergyManager",
        id: 7,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_REFERENCE");
    assert_eq!(
        json["error"],
        "Invalid reference: EnergyManager with id 7 does not exist"
    );
}

#[tokio::test]
async fn capacity_exceeded_returns_409() {
    let err = AppError::Core(CoreError::CapacityExceeded {
        requested: 110,
        max_power: 100,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CAPACITY_EXCEEDED");
    assert_eq!(
        json["error"],
        "Capacity exceeded: total asset power 110 is above plant maximum 100"
    );
}

#[tokio::test]
async fn invalid_type_returns_400() {
    let err = AppError::Core(CoreError::InvalidType("boiler".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_TYPE");
    assert!(json["error"].as_str().unwrap().contains("'boiler'"));
}

#[tokio::test]
async fn validation_error_returns_400_with_bare_message() {
    let err = AppError::Core(CoreError::Validation("name: too short".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name: too short");
}

#[tokio::test]
async fn manager_in_use_returns_409() {
    let err = AppError::Core(CoreError::ManagerInUse { id: 3, plants: 2 });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "MANAGER_IN_USE");
}

#[tokio::test]
async fn store_error_returns_500_and_hides_details() {
    let err = AppError::Core(CoreError::Store(StoreError::new(
        "connection refused (os error 111)",
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
