//! Workout recommendation core
//!
//! Two selection paths over an encoded feature vector:
//!
//! 1. A feature-weighted nearest-neighbor vote over the historical dataset
//!    ([`score_nearest`]). Continuous features are normalized by fixed scale
//!    constants; categorical features contribute 0/1 mismatch terms; each
//!    squared term carries a fixed importance weight.
//! 2. A deterministic rule table ([`select_by_rules`]) used when no dataset
//!    is available or scoring fails.
//!
//! Both paths only pick the workout category; plan expansion lives in
//! [`crate::plans`].

use crate::errors::RecommendError;
use crate::features::EncodedFeatures;
use crate::models::{Goal, HistoricalEntry, WorkoutType};
use rand::Rng;

/// Neighbors considered by the vote. Smaller datasets vote over every entry.
pub const K_NEIGHBORS: usize = 5;

// Normalization scales for the continuous features.
const AGE_SCALE: f64 = 50.0;
const FITNESS_SCALE: f64 = 5.0;
const TIME_SCALE: f64 = 60.0;
const EXPERIENCE_SCALE: f64 = 20.0;

// Importance weights applied to the squared terms.
const WEIGHT_AGE: f64 = 1.0;
const WEIGHT_GENDER: f64 = 1.0;
const WEIGHT_FITNESS: f64 = 2.0;
const WEIGHT_GOAL: f64 = 3.0;
const WEIGHT_TIME: f64 = 1.0;
const WEIGHT_EXPERIENCE: f64 = 1.0;
const WEIGHT_EQUIPMENT: f64 = 2.0;
const WEIGHT_HEALTH: f64 = 2.0;

/// Outcome of a scoring pass: the winning category and the vote share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    pub workout_type: WorkoutType,
    /// 0-100, rounded share of neighbors that voted for the winner
    pub confidence: u8,
}

/// Weighted distance between the query vector and one dataset entry
///
/// Continuous diffs are normalized before squaring; categorical terms are
/// 0 on equality and 1 on mismatch, so they are not sign-sensitive.
pub fn weighted_distance(query: &EncodedFeatures, entry: &HistoricalEntry) -> f64 {
    let age_diff = (entry.age - query.age) / AGE_SCALE;
    let fitness_diff = (entry.fitness_level - f64::from(query.fitness_level)) / FITNESS_SCALE;
    let time_diff = (entry.time_available - f64::from(query.time_available)) / TIME_SCALE;
    let exp_diff = (entry.experience_years - query.experience_years) / EXPERIENCE_SCALE;

    let gender_diff = mismatch(entry.gender_encoded == query.gender.code());
    let goal_diff = mismatch(entry.goal_encoded == query.goal.code());
    let equip_diff = mismatch(entry.has_equipment == u8::from(query.has_equipment));
    let health_diff = mismatch(entry.has_health_condition == u8::from(query.has_health_condition));

    (age_diff * age_diff * WEIGHT_AGE
        + gender_diff * gender_diff * WEIGHT_GENDER
        + fitness_diff * fitness_diff * WEIGHT_FITNESS
        + goal_diff * goal_diff * WEIGHT_GOAL
        + time_diff * time_diff * WEIGHT_TIME
        + exp_diff * exp_diff * WEIGHT_EXPERIENCE
        + equip_diff * equip_diff * WEIGHT_EQUIPMENT
        + health_diff * health_diff * WEIGHT_HEALTH)
        .sqrt()
}

fn mismatch(equal: bool) -> f64 {
    if equal {
        0.0
    } else {
        1.0
    }
}

/// Nearest-neighbor vote over the historical dataset
///
/// Takes the k = min([`K_NEIGHBORS`], dataset length) nearest entries by
/// weighted distance and majority-votes their labels. Ties resolve to the
/// label that reaches the maximum count first in neighbor order, which is
/// stable under the ascending distance sort.
///
/// Errors on an empty dataset or on a non-finite distance (malformed
/// numeric data); callers recover with [`select_by_rules`].
pub fn score_nearest(
    query: &EncodedFeatures,
    dataset: &[HistoricalEntry],
) -> Result<Scored, RecommendError> {
    if dataset.is_empty() {
        return Err(RecommendError::EmptyDataset);
    }

    let mut scored: Vec<(f64, WorkoutType)> = Vec::with_capacity(dataset.len());
    for (index, entry) in dataset.iter().enumerate() {
        let distance = weighted_distance(query, entry);
        if !distance.is_finite() {
            return Err(RecommendError::NonFiniteDistance { index });
        }
        scored.push((distance, entry.recommended_workout));
    }

    // Stable sort keeps dataset order among equidistant entries.
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));

    let k = K_NEIGHBORS.min(scored.len());
    let neighbors = &scored[..k];

    // Tally in first-occurrence order so the tie-break matches a single
    // left-to-right pass over the neighbor list.
    let mut tally: Vec<(WorkoutType, usize)> = Vec::with_capacity(k);
    for &(_, workout) in neighbors {
        match tally.iter_mut().find(|(w, _)| *w == workout) {
            Some((_, count)) => *count += 1,
            None => tally.push((workout, 1)),
        }
    }

    let mut winner = tally[0].0;
    let mut winner_votes = 0usize;
    for &(workout, votes) in &tally {
        if votes > winner_votes {
            winner = workout;
            winner_votes = votes;
        }
    }

    let confidence = ((winner_votes as f64 / k as f64) * 100.0).round() as u8;

    Ok(Scored {
        workout_type: winner,
        confidence,
    })
}

/// Base category for each training goal
///
/// Explicit lookup table; the legacy engine reused the goal code as an
/// index into the category list, which happened to line up for the first
/// five ordinals.
fn goal_base_workout(goal: Goal) -> WorkoutType {
    match goal {
        Goal::WeightLoss => WorkoutType::Hiit,
        Goal::MuscleGain => WorkoutType::StrengthTraining,
        Goal::GeneralFitness => WorkoutType::CardioEndurance,
        Goal::Endurance => WorkoutType::FlexibilityAndMobility,
        Goal::Flexibility => WorkoutType::CircuitTraining,
    }
}

/// Rule-based category selection, used when no dataset is available
///
/// Pure function over the feature vector: starts from the goal's base
/// category, then adjusts for fitness level, equipment, and health
/// condition, in that order.
pub fn select_by_rules(features: &EncodedFeatures) -> WorkoutType {
    let mut workout = goal_base_workout(features.goal);

    // Beginners get simpler variants of the demanding categories.
    if features.fitness_level <= 2 {
        if workout == WorkoutType::StrengthTraining {
            workout = WorkoutType::BodyweightTraining;
        }
        if workout == WorkoutType::FlexibilityAndMobility {
            workout = WorkoutType::Running;
        }
    }

    // Strength work needs equipment.
    if !features.has_equipment && workout == WorkoutType::StrengthTraining {
        workout = WorkoutType::BodyweightTraining;
    }

    // Health conditions rule out the high-impact categories.
    if features.has_health_condition
        && matches!(
            workout,
            WorkoutType::Hiit | WorkoutType::FlexibilityAndMobility | WorkoutType::CrossFit
        )
    {
        workout = WorkoutType::Yoga;
    }

    workout
}

/// Confidence reported by the rule-based path
///
/// Uniform in [60, 90); the variability is intentional (the rule table has
/// no vote share to report). The RNG is injected so tests can seed it.
pub fn fallback_confidence<R: Rng>(rng: &mut R) -> u8 {
    rng.gen_range(60..90)
}
