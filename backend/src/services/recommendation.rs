//! Recommendation pipeline
//!
//! Orchestrates the shared engine: encode the submission, try the
//! nearest-neighbor vote over the historical dataset, degrade to the rule
//! table on any scoring failure, then expand the pick into a session plan.
//! A valid submission always yields a recommendation.

use fitbuddy_shared::features::EncodedFeatures;
use fitbuddy_shared::models::{HistoricalEntry, Recommendation};
use fitbuddy_shared::plans::build_plan;
use fitbuddy_shared::recommender::{fallback_confidence, score_nearest, select_by_rules, Scored};
use fitbuddy_shared::types::UserInput;
use rand::Rng;
use tracing::{debug, warn};

/// Workout recommendation service
pub struct RecommendationService;

impl RecommendationService {
    /// Produce a recommendation for one intake submission
    ///
    /// The RNG only feeds the fallback path's confidence value; tests pass
    /// a seeded generator for reproducibility.
    pub fn recommend<R: Rng>(
        input: &UserInput,
        dataset: Option<&[HistoricalEntry]>,
        rng: &mut R,
    ) -> Recommendation {
        let features = EncodedFeatures::from_input(input);

        let scored = match dataset {
            Some(entries) => match score_nearest(&features, entries) {
                Ok(scored) => {
                    debug!(
                        workout = %scored.workout_type,
                        confidence = scored.confidence,
                        neighbors = entries.len().min(fitbuddy_shared::recommender::K_NEIGHBORS),
                        "nearest-neighbor vote"
                    );
                    scored
                }
                Err(e) => {
                    warn!(error = %e, "scoring failed, using rule-based selection");
                    Self::rule_based(&features, rng)
                }
            },
            None => {
                debug!("no historical dataset, using rule-based selection");
                Self::rule_based(&features, rng)
            }
        };

        let details = build_plan(scored.workout_type, &features);

        Recommendation {
            workout_type: scored.workout_type,
            confidence: scored.confidence,
            details,
        }
    }

    fn rule_based<R: Rng>(features: &EncodedFeatures, rng: &mut R) -> Scored {
        Scored {
            workout_type: select_by_rules(features),
            confidence: fallback_confidence(rng),
        }
    }
}
