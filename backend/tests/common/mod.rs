//! Common test utilities for integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use fitbuddy_backend::{config::AppConfig, routes, state::AppState};
use std::path::PathBuf;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a test application with no historical dataset
    pub fn new() -> Self {
        Self::with_dataset("does/not/exist.json")
    }

    /// Create a test application reading the given dataset fixture
    pub fn with_fixture(name: &str) -> Self {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        Self::with_dataset(path.to_str().unwrap())
    }

    fn with_dataset(path: &str) -> Self {
        let mut config = AppConfig::default();
        config.data.workout_dataset_path = PathBuf::from(path);

        let state = AppState::new(config);
        let app = routes::create_router(state);

        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a CORS preflight request
    pub async fn preflight(&self, path: &str, method: &str) -> StatusCode {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(path)
            .header("Origin", "https://fitbuddy.example")
            .header("Access-Control-Request-Method", method)
            .body(Body::empty())
            .unwrap();

        self.send(request).await.0
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}
