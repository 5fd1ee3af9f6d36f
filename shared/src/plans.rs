//! Workout plan expansion
//!
//! Turns a recommended category into a concrete session: the category's
//! fixed exercise table, an intensity derived from fitness level, and a
//! shortened list when the user is pressed for time.

use crate::features::EncodedFeatures;
use crate::models::{Exercise, Intensity, WorkoutPlan, WorkoutType};

/// Sessions shorter than this keep only the first [`SHORT_SESSION_EXERCISES`]
/// exercises of the table.
pub const SHORT_SESSION_MINUTES: i32 = 30;
pub const SHORT_SESSION_EXERCISES: usize = 3;

/// Build the session plan for a recommended category
pub fn build_plan(workout_type: WorkoutType, features: &EncodedFeatures) -> WorkoutPlan {
    let mut exercises = exercise_table(workout_type);

    // Prefix truncation only; the table order already front-loads the
    // essential movements.
    if features.time_available < SHORT_SESSION_MINUTES {
        exercises.truncate(SHORT_SESSION_EXERCISES);
    }

    WorkoutPlan {
        workout_type,
        duration: features.time_available.max(0) as u32,
        exercises,
        intensity: intensity_for(features.fitness_level),
    }
}

/// Intensity from the 1-5 fitness level
pub fn intensity_for(fitness_level: i32) -> Intensity {
    if fitness_level <= 2 {
        Intensity::Low
    } else if fitness_level >= 4 {
        Intensity::High
    } else {
        Intensity::Moderate
    }
}

/// The fixed exercise table for each category
///
/// Domain data carried over from the coaching content; at most 5 entries
/// per category.
pub fn exercise_table(workout_type: WorkoutType) -> Vec<Exercise> {
    match workout_type {
        WorkoutType::Hiit => vec![
            Exercise::new("Burpees", 3, "45 seconds", "15 seconds"),
            Exercise::new("Mountain Climbers", 3, "45 seconds", "15 seconds"),
            Exercise::new("Jumping Jacks", 3, "45 seconds", "15 seconds"),
            Exercise::new("High Knees", 3, "45 seconds", "15 seconds"),
            Exercise::new("Squat Jumps", 3, "45 seconds", "15 seconds"),
        ],
        WorkoutType::StrengthTraining => vec![
            Exercise::new("Squats", 4, "10-12", "60 seconds"),
            Exercise::new("Bench Press", 4, "8-10", "90 seconds"),
            Exercise::new("Deadlifts", 4, "8-10", "90 seconds"),
            Exercise::new("Shoulder Press", 3, "10-12", "60 seconds"),
            Exercise::new("Barbell Rows", 3, "10-12", "60 seconds"),
        ],
        WorkoutType::CardioEndurance => vec![
            Exercise::new("Jogging", 1, "20 minutes", "none"),
            Exercise::new("Jumping Rope", 3, "3 minutes", "1 minute"),
            Exercise::new("Cycling", 1, "15 minutes", "none"),
            Exercise::new("Jump Squats", 3, "15", "30 seconds"),
            Exercise::new("Burpees", 3, "10", "30 seconds"),
        ],
        WorkoutType::FlexibilityAndMobility => vec![
            Exercise::new("Dynamic Stretching", 1, "5 minutes", "none"),
            Exercise::new("Hip Openers", 2, "30 seconds each side", "15 seconds"),
            Exercise::new("Shoulder Mobility Flow", 2, "1 minute", "30 seconds"),
            Exercise::new("Hamstring Stretch", 2, "30 seconds each leg", "15 seconds"),
            Exercise::new("Spine Mobility", 2, "1 minute", "30 seconds"),
        ],
        WorkoutType::CircuitTraining => vec![
            Exercise::new("Push-ups", 3, "12-15", "30 seconds"),
            Exercise::new("Bodyweight Squats", 3, "15-20", "30 seconds"),
            Exercise::new("Dumbbell Rows", 3, "12 each arm", "30 seconds"),
            Exercise::new("Lunges", 3, "10 each leg", "30 seconds"),
            Exercise::new("Plank", 3, "45 seconds", "30 seconds"),
        ],
        WorkoutType::BodyweightTraining => vec![
            Exercise::new("Push-ups", 3, "10-15", "45 seconds"),
            Exercise::new("Bodyweight Squats", 3, "15-20", "45 seconds"),
            Exercise::new("Plank", 3, "30-60 seconds", "30 seconds"),
            Exercise::new("Lunges", 3, "10 each leg", "45 seconds"),
            Exercise::new("Mountain Climbers", 3, "30 seconds", "30 seconds"),
        ],
        WorkoutType::Yoga => vec![
            Exercise::new("Sun Salutation", 1, "5 flows", "as needed"),
            Exercise::new("Warrior Poses", 1, "hold 30 seconds each side", "as needed"),
            Exercise::new("Downward Dog", 1, "hold 1 minute", "as needed"),
            Exercise::new("Child's Pose", 1, "hold 1 minute", "as needed"),
            Exercise::new("Seated Forward Bend", 1, "hold 1 minute", "as needed"),
        ],
        WorkoutType::CrossFit => vec![
            Exercise::new("Box Jumps", 5, "10", "30 seconds"),
            Exercise::new("Kettlebell Swings", 5, "15", "30 seconds"),
            Exercise::new("Pull-ups", 5, "5-10", "30 seconds"),
            Exercise::new("Wall Balls", 5, "15", "30 seconds"),
            Exercise::new("Double Unders", 5, "30", "30 seconds"),
        ],
        WorkoutType::Swimming => vec![
            Exercise::new("Freestyle", 1, "200m", "45 seconds"),
            Exercise::new("Backstroke", 1, "200m", "45 seconds"),
            Exercise::new("Breaststroke", 1, "200m", "45 seconds"),
            Exercise::new("Sprint Intervals", 5, "50m", "30 seconds"),
            Exercise::new("Cool Down", 1, "100m easy", "none"),
        ],
        WorkoutType::Running => vec![
            Exercise::new("Warm Up Jog", 1, "5 minutes", "none"),
            Exercise::new("Sprint Intervals", 5, "30 seconds", "1 minute"),
            Exercise::new("Tempo Run", 1, "10 minutes", "none"),
            Exercise::new("Hill Repeats", 3, "1 minute", "1 minute"),
            Exercise::new("Cool Down", 1, "5 minutes", "none"),
        ],
    }
}
