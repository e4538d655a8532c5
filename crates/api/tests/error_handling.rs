//! Tests for `AppError` -> HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use reel_api::error::AppError;
use reel_core::error::CoreError;
use reel_core::validation::rules::FieldViolation;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404_with_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id: "42".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Movie not found");
}

#[tokio::test]
async fn route_specific_not_found_keeps_its_message() {
    let (status, json) = error_to_response(AppError::NotFound("Movie not found.")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Movie not found.");
}

#[tokio::test]
async fn validation_error_returns_400_with_violation_list() {
    let err = AppError::Core(CoreError::Validation(vec![
        FieldViolation::required("title"),
        FieldViolation::new("rate", "too_big", "rate must be at most 10"),
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = json["error"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "title");
    assert_eq!(errors[0]["message"], "title is required");
    assert_eq!(errors[1]["rule"], "too_big");
}

#[tokio::test]
async fn origin_not_allowed_returns_403() {
    let err = AppError::Core(CoreError::OriginNotAllowed("https://evil.example".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "ORIGIN_NOT_ALLOWED");
    assert!(
        !json.to_string().contains("evil.example"),
        "rejection body should not echo the origin"
    );
}

#[tokio::test]
async fn bad_request_error_returns_400_with_code() {
    let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad body");
}
