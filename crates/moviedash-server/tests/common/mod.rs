//! Common test utilities for moviedash-server integration tests.

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

use moviedash_core::{DashboardSettings, Dataset};
use moviedash_server::{router, AppState};

/// Path of the bundled sample dataset.
pub fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/movie_ratings.csv")
}

/// Helper to create test app over the bundled dataset
pub fn create_test_app() -> Router {
    let dataset = Dataset::from_path(sample_path()).expect("Failed to load dataset");
    create_app_with(dataset)
}

/// Helper to create test app over an arbitrary dataset
pub fn create_app_with(dataset: Dataset) -> Router {
    let state = Arc::new(AppState::new(
        Arc::new(dataset),
        DashboardSettings::default(),
    ));
    router(state)
}

/// Send a request and decode the JSON body.
pub async fn send_json(app: Router, request: Request<Body>) -> (axum::http::StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    (status, json)
}

/// POST a JSON body.
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// GET a URI.
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}
