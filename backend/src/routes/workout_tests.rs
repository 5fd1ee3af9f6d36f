//! Handler-level tests for the workout API
//!
//! Exercises the full router (middleware included) with in-memory requests.

use crate::config::AppConfig;
use crate::routes::create_router;
use crate::state::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

/// Router whose dataset path points at a fixture (or at nothing)
fn test_app(dataset_fixture: Option<&str>) -> Router {
    let mut config = AppConfig::default();
    config.data.workout_dataset_path = match dataset_fixture {
        Some(name) => PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name),
        None => PathBuf::from("does/not/exist.json"),
    };
    create_router(AppState::new(config))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn types_endpoint_lists_all_categories_in_order() {
    let request = Request::builder()
        .uri("/api/workout/types")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(None), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let types = body["workout_types"].as_array().unwrap();
    assert_eq!(types.len(), 10);
    assert_eq!(types[0], "High-Intensity Interval Training (HIIT)");
    assert_eq!(types[2], "Cardio Endurance");
    assert_eq!(types[9], "Running");
}

#[tokio::test]
async fn empty_object_is_a_valid_submission() {
    let (status, body) = send(test_app(None), post_json("/api/workout/recommend", "{}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    // Default goal is general_fitness -> Cardio Endurance via the rule table.
    assert_eq!(body["recommendation"]["recommendation"], "Cardio Endurance");

    let confidence = body["recommendation"]["confidence"].as_u64().unwrap();
    assert!((60..90).contains(&confidence));

    let details = &body["recommendation"]["details"];
    assert_eq!(details["type"], "Cardio Endurance");
    assert_eq!(details["duration"], 30);
    assert_eq!(details["intensity"], "moderate");
    assert_eq!(details["exercises"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn missing_body_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/workout/recommend")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(None), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "No request body provided");
}

#[tokio::test]
async fn wrong_methods_are_rejected() {
    let request = Request::builder()
        .method("GET")
        .uri("/api/workout/recommend")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(test_app(None), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(test_app(None), post_json("/api/workout/types", "{}")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn dataset_vote_overrides_the_rule_table() {
    // The fixture's five nearest entries all agree on Yoga for the default
    // profile.
    let (status, body) = send(
        test_app(Some("workout_data.json")),
        post_json("/api/workout/recommend", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendation"]["recommendation"], "Yoga");
    assert_eq!(body["recommendation"]["confidence"], 100);
}

#[tokio::test]
async fn beginner_without_equipment_gets_bodyweight_training() {
    let submission = r#"{"fitnessLevel": 1, "goal": "muscle_gain", "hasEquipment": false}"#;
    let (status, body) = send(test_app(None), post_json("/api/workout/recommend", submission)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendation"]["recommendation"], "Bodyweight Training");
    assert_eq!(body["recommendation"]["details"]["intensity"], "low");
}

#[tokio::test]
async fn health_condition_redirects_to_yoga() {
    let submission = r#"{"goal": "weight_loss", "hasHealthCondition": true}"#;
    let (status, body) = send(test_app(None), post_json("/api/workout/recommend", submission)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommendation"]["recommendation"], "Yoga");
}

#[tokio::test]
async fn short_sessions_get_truncated_plans() {
    let submission = r#"{"timeAvailable": 20}"#;
    let (status, body) = send(test_app(None), post_json("/api/workout/recommend", submission)).await;

    assert_eq!(status, StatusCode::OK);
    let details = &body["recommendation"]["details"];
    assert_eq!(details["duration"], 20);
    assert_eq!(details["exercises"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unreadable_dataset_still_succeeds() {
    let (status, body) = send(
        test_app(Some("malformed_workout_data.json")),
        post_json("/api/workout/recommend", "{}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["recommendation"]["recommendation"], "Cardio Endurance");
}
