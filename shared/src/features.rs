//! Feature encoding for the recommendation engine
//!
//! Maps a raw intake submission into the fixed-order numeric feature vector
//! the scorer and the rule table operate on. Encoding is total: missing or
//! unrecognized fields become documented defaults, never errors.

use crate::models::{Gender, Goal};
use crate::types::UserInput;

pub const DEFAULT_AGE: f64 = 30.0;
pub const DEFAULT_FITNESS_LEVEL: i32 = 3;
pub const DEFAULT_TIME_AVAILABLE_MIN: i32 = 30;
pub const DEFAULT_EXPERIENCE_YEARS: f64 = 1.0;

/// Fully-populated feature vector derived from a [`UserInput`]
///
/// Immutable value object; field order matches the historical dataset
/// columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedFeatures {
    pub age: f64,
    pub gender: Gender,
    pub fitness_level: i32,
    pub goal: Goal,
    pub time_available: i32,
    pub experience_years: f64,
    pub has_equipment: bool,
    pub has_health_condition: bool,
}

impl EncodedFeatures {
    /// Encode a raw submission, applying defaults for anything missing
    pub fn from_input(input: &UserInput) -> Self {
        Self {
            age: input.age.unwrap_or(DEFAULT_AGE),
            gender: input
                .gender
                .as_deref()
                .map(Gender::from_label)
                .unwrap_or_default(),
            fitness_level: input.fitness_level.unwrap_or(DEFAULT_FITNESS_LEVEL),
            goal: input
                .goal
                .as_deref()
                .map(Goal::from_label)
                .unwrap_or_default(),
            time_available: input.time_available.unwrap_or(DEFAULT_TIME_AVAILABLE_MIN),
            experience_years: input.experience_years.unwrap_or(DEFAULT_EXPERIENCE_YEARS),
            has_equipment: input.has_equipment.unwrap_or(false),
            has_health_condition: input.has_health_condition.unwrap_or(false),
        }
    }
}

impl Default for EncodedFeatures {
    fn default() -> Self {
        Self::from_input(&UserInput::default())
    }
}
