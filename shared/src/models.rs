//! Domain models for the FitBuddy recommendation engine

use serde::{Deserialize, Serialize};

/// Gender as captured by the intake form
///
/// The numeric code is part of the historical dataset format, so the
/// discriminants are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male = 0,
    Female = 1,
    Other = 2,
}

impl Gender {
    /// Numeric code used in the historical dataset
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Parse an intake string, mapping anything unrecognized to the default
    pub fn from_label(label: &str) -> Self {
        match label {
            "male" => Gender::Male,
            "female" => Gender::Female,
            "other" => Gender::Other,
            _ => Gender::default(),
        }
    }
}

/// Training goal as captured by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss = 0,
    MuscleGain = 1,
    #[default]
    GeneralFitness = 2,
    Endurance = 3,
    Flexibility = 4,
}

impl Goal {
    /// Numeric code used in the historical dataset
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Parse an intake string, mapping anything unrecognized to the default
    pub fn from_label(label: &str) -> Self {
        match label {
            "weight_loss" => Goal::WeightLoss,
            "muscle_gain" => Goal::MuscleGain,
            "general_fitness" => Goal::GeneralFitness,
            "endurance" => Goal::Endurance,
            "flexibility" => Goal::Flexibility,
            _ => Goal::default(),
        }
    }
}

/// The closed set of workout categories the engine can recommend
///
/// Ordinal order is fixed: the historical dataset and the rule-based
/// selector both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "High-Intensity Interval Training (HIIT)")]
    Hiit,
    #[serde(rename = "Strength Training")]
    StrengthTraining,
    #[serde(rename = "Cardio Endurance")]
    CardioEndurance,
    #[serde(rename = "Flexibility and Mobility")]
    FlexibilityAndMobility,
    #[serde(rename = "Circuit Training")]
    CircuitTraining,
    #[serde(rename = "Bodyweight Training")]
    BodyweightTraining,
    #[serde(rename = "Yoga")]
    Yoga,
    #[serde(rename = "CrossFit")]
    CrossFit,
    #[serde(rename = "Swimming")]
    Swimming,
    #[serde(rename = "Running")]
    Running,
}

impl WorkoutType {
    /// All workout types in ordinal order
    pub const ALL: [WorkoutType; 10] = [
        WorkoutType::Hiit,
        WorkoutType::StrengthTraining,
        WorkoutType::CardioEndurance,
        WorkoutType::FlexibilityAndMobility,
        WorkoutType::CircuitTraining,
        WorkoutType::BodyweightTraining,
        WorkoutType::Yoga,
        WorkoutType::CrossFit,
        WorkoutType::Swimming,
        WorkoutType::Running,
    ];

    /// Human-readable label (also the wire/dataset representation)
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Hiit => "High-Intensity Interval Training (HIIT)",
            WorkoutType::StrengthTraining => "Strength Training",
            WorkoutType::CardioEndurance => "Cardio Endurance",
            WorkoutType::FlexibilityAndMobility => "Flexibility and Mobility",
            WorkoutType::CircuitTraining => "Circuit Training",
            WorkoutType::BodyweightTraining => "Bodyweight Training",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::CrossFit => "CrossFit",
            WorkoutType::Swimming => "Swimming",
            WorkoutType::Running => "Running",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Workout intensity, derived from the user's fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

/// A single exercise within a workout plan
///
/// `reps` and `rest` are free-form: a rep count ("10-12"), a duration
/// ("45 seconds"), or "none".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest: String,
}

impl Exercise {
    pub fn new(name: &str, sets: u32, reps: &str, rest: &str) -> Self {
        Self {
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            rest: rest.to_string(),
        }
    }
}

/// A structured workout plan for a recommended category
///
/// Invariant: at most 5 exercises, truncated to the first 3 when the
/// session is shorter than 30 minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Session length in minutes
    pub duration: u32,
    pub exercises: Vec<Exercise>,
    pub intensity: Intensity,
}

/// The engine's answer for a single intake submission
///
/// Field names follow the legacy wire format consumed by the web client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "recommendation")]
    pub workout_type: WorkoutType,
    /// 0-100; how strongly the engine backs the pick. Not a calibrated
    /// probability.
    pub confidence: u8,
    pub details: WorkoutPlan,
}

/// One record of the read-only historical dataset
///
/// Matches the legacy JSON format: categorical features are stored as
/// numeric codes, flags as 0/1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalEntry {
    pub age: f64,
    pub gender_encoded: u8,
    pub fitness_level: f64,
    pub goal_encoded: u8,
    pub time_available: f64,
    pub experience_years: f64,
    pub has_equipment: u8,
    pub has_health_condition: u8,
    pub recommended_workout: WorkoutType,
}
