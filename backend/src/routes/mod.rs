//! Route definitions for the FitBuddy API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::Method,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod health;
mod workout;

#[cfg(test)]
mod workout_tests;

pub use workout::workout_routes;

/// Create the main application router with all middleware
///
/// CORS is wide open: the web client is served from a different origin and
/// the API carries no credentials. Preflight OPTIONS requests are answered
/// by the CORS layer itself.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/workout", workout::workout_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::OPTIONS,
                    Method::PATCH,
                    Method::DELETE,
                    Method::POST,
                    Method::PUT,
                ])
                .allow_headers(Any),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
