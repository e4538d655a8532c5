//! Shared helpers for API integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use reel_core::movie::Movie;
use serde_json::Value;
use tower::ServiceExt;

use reel_api::config::ServerConfig;
use reel_api::router::build_app_router;
use reel_api::state::AppState;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![ALLOWED_ORIGIN.to_string(), "https://movies.com".to_string()],
        request_timeout_secs: 30,
        seed_path: None,
    }
}

/// A small, predictable catalogue.
pub fn fixture_movies() -> Vec<Movie> {
    vec![
        movie("1", "The Matrix", 1999, &["Action", "Sci-Fi"]),
        movie("2", "Heat", 1995, &["Crime", "Drama"]),
        movie("3", "Speed", 1994, &["action", "Thriller"]),
    ]
}

fn movie(id: &str, title: &str, year: i32, genre: &[&str]) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year,
        director: "Test Director".to_string(),
        duration: 120,
        poster: format!("https://example.com/{id}.jpg"),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        rate: 7.5,
    }
}

/// Build the full application router over the fixture catalogue.
///
/// The returned router is cheap to clone and every clone shares the same
/// store, so a test can issue several requests against one state.
pub fn build_test_app() -> Router {
    build_test_app_with(fixture_movies())
}

pub fn build_test_app_with(movies: Vec<Movie>) -> Router {
    let config = test_config();
    let pool = reel_db::create_pool(movies).expect("fixture ids are unique");
    let state = AppState::new(pool, &config);
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, &json)).await
}

pub async fn patch_json(app: Router, uri: &str, json: Value) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, &json)).await
}

fn json_request(method: Method, uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
