//! Workout recommendation API routes

use crate::error::{ApiError, ApiResult};
use crate::services::dataset;
use crate::services::recommendation::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use fitbuddy_shared::models::WorkoutType;
use fitbuddy_shared::types::{RecommendResponse, UserInput, WorkoutTypesResponse};
use tracing::{debug, info};

/// Create workout routes
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/types", get(get_workout_types))
        .route("/recommend", post(recommend_workout))
}

/// GET /api/workout/types - List the workout categories
///
/// Labels are returned in ordinal order; the web client renders them as-is.
async fn get_workout_types() -> Json<WorkoutTypesResponse> {
    Json(WorkoutTypesResponse {
        success: true,
        workout_types: WorkoutType::ALL
            .iter()
            .map(|w| w.label().to_string())
            .collect(),
    })
}

/// POST /api/workout/recommend - Recommend a workout for an intake submission
///
/// Every field of the body is optional; an empty object is a valid
/// submission and gets the default profile. A missing or undecodable body
/// is a 400. Once the body decodes, the request always succeeds: scoring
/// failures degrade to the rule-based selector inside the service layer.
async fn recommend_workout(
    State(state): State<AppState>,
    payload: Option<Json<UserInput>>,
) -> ApiResult<Json<RecommendResponse>> {
    let Some(Json(input)) = payload else {
        return Err(ApiError::BadRequest("No request body provided".to_string()));
    };

    debug!(?input, "received workout recommendation request");

    let entries = dataset::load_entries(state.dataset_path()).await;
    let recommendation =
        RecommendationService::recommend(&input, entries.as_deref(), &mut rand::thread_rng());

    info!(
        workout = %recommendation.workout_type,
        confidence = recommendation.confidence,
        "generated recommendation"
    );

    Ok(Json(RecommendResponse {
        success: true,
        recommendation,
    }))
}
