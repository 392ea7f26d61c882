// ABOUTME: Environment-based configuration for the recipe planner
// ABOUTME: Reads dataset location, rating floor, and recall keyword file from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use food_planner_core::constants::pipeline::{DEFAULT_DATASET_PATH, DEFAULT_MIN_RATING};

/// Env var naming the reference dataset CSV
pub const DATASET_PATH_ENV: &str = "FOOD_PLANNER_DATASET_PATH";
/// Env var overriding the minimum rating
pub const MIN_RATING_ENV: &str = "FOOD_PLANNER_MIN_RATING";
/// Env var naming a recall keyword file
pub const RECALL_FILE_ENV: &str = "FOOD_PLANNER_RECALL_FILE";

/// Runtime settings of the recipe pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Path of the reference dataset, re-read on every query
    pub dataset_path: PathBuf,
    /// Minimum rating a recipe needs to be selected
    pub min_rating: f64,
    /// Optional file of recall keywords replacing the built-in list
    pub recall_file: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            min_rating: DEFAULT_MIN_RATING,
            recall_file: None,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables take their defaults; invalid values are logged and
    /// replaced by the default.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = non_empty_env(DATASET_PATH_ENV) {
            config.dataset_path = PathBuf::from(path);
        }

        if let Some(raw) = non_empty_env(MIN_RATING_ENV) {
            match raw.trim().parse::<f64>() {
                Ok(rating) if rating.is_finite() => config.min_rating = rating,
                _ => warn!(
                    variable = MIN_RATING_ENV,
                    value = %raw,
                    default = DEFAULT_MIN_RATING,
                    "Invalid minimum rating, using default"
                ),
            }
        }

        config.recall_file = non_empty_env(RECALL_FILE_ENV).map(PathBuf::from);

        config
    }

    /// Replace the dataset path
    #[must_use]
    pub fn with_dataset_path(mut self, path: impl AsRef<Path>) -> Self {
        self.dataset_path = path.as_ref().to_path_buf();
        self
    }

    /// Replace the minimum rating
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Set the recall keyword file
    #[must_use]
    pub fn with_recall_file(mut self, path: impl AsRef<Path>) -> Self {
        self.recall_file = Some(path.as_ref().to_path_buf());
        self
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
