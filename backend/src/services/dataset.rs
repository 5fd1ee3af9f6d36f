//! Historical workout dataset loading
//!
//! The dataset is a static JSON file of [`HistoricalEntry`] records, read
//! fresh on each recommendation request. It is strictly optional: a missing
//! or unreadable file routes the request to the rule-based selector and is
//! never surfaced as an HTTP error.

use fitbuddy_shared::models::HistoricalEntry;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Load the historical dataset, if one is available
pub async fn load_entries(path: &Path) -> Option<Vec<HistoricalEntry>> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no historical dataset file");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read historical dataset");
            return None;
        }
    };

    match serde_json::from_slice::<Vec<HistoricalEntry>>(&raw) {
        Ok(entries) => {
            debug!(count = entries.len(), "loaded historical dataset");
            Some(entries)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed historical dataset");
            None
        }
    }
}
