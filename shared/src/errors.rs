//! Error types for the recommendation engine

use thiserror::Error;

/// Failure modes of the nearest-neighbor scoring path
///
/// These never surface to API callers; the caller recovers by switching to
/// the rule-based selector.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecommendError {
    #[error("historical dataset is empty")]
    EmptyDataset,

    #[error("non-finite distance for dataset entry {index}")]
    NonFiniteDistance { index: usize },
}
