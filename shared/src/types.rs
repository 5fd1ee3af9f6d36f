//! API request and response types
//!
//! Wire shapes match the legacy FitBuddy web client: camelCase request
//! fields, `success` discriminator on every response.

use crate::models::Recommendation;
use serde::{Deserialize, Serialize};

/// Raw intake submission for a workout recommendation
///
/// Every field is optional; the feature encoder supplies defaults. Gender
/// and goal are carried as raw strings because unrecognized values must map
/// to a default category rather than fail deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInput {
    pub age: Option<f64>,
    pub gender: Option<String>,
    /// Self-assessed fitness level, 1 (beginner) to 5 (advanced)
    pub fitness_level: Option<i32>,
    pub goal: Option<String>,
    /// Minutes available per session
    pub time_available: Option<i32>,
    pub experience_years: Option<f64>,
    pub has_equipment: Option<bool>,
    pub has_health_condition: Option<bool>,
}

/// Response for `GET /api/workout/types`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutTypesResponse {
    pub success: bool,
    pub workout_types: Vec<String>,
}

/// Response for `POST /api/workout/recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendation: Recommendation,
}

/// Error body shared by all endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: String,
}
