//! FitBuddy Shared Library
//!
//! Pure domain types and algorithms for the workout recommendation engine:
//! feature encoding, nearest-neighbor scoring, the rule-based fallback, and
//! plan expansion. No I/O lives here; the backend crate handles HTTP and
//! dataset loading.

pub mod errors;
pub mod features;
pub mod models;
pub mod plans;
pub mod recommender;
pub mod types;

// Re-export commonly used items
pub use errors::RecommendError;
pub use features::EncodedFeatures;
pub use models::{
    Exercise, Gender, Goal, HistoricalEntry, Intensity, Recommendation, WorkoutPlan, WorkoutType,
};
pub use types::{ApiErrorResponse, RecommendResponse, UserInput, WorkoutTypesResponse};
