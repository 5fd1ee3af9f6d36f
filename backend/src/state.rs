//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use std::path::Path;
use std::sync::Arc;

/// Shared application state
///
/// The recommendation engine is stateless; the only shared resource is the
/// configuration, wrapped in an Arc so cloning across async tasks is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Path of the optional historical workout dataset
    #[inline]
    pub fn dataset_path(&self) -> &Path {
        &self.config.data.workout_dataset_path
    }
}
