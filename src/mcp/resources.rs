// ABOUTME: Shared resource container handed to every tool call
// ABOUTME: Holds planner configuration and lookup tables, and reads the dataset on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planner Resources
//!
//! Built once at startup and shared through `Arc`. Nothing here is mutated
//! afterwards; the dataset is not cached and is re-read per query.

use tracing::{info, warn};

use crate::config::{PlannerConfig, RecipeTables};
use crate::dataset;
use crate::errors::PlannerError;
use crate::intelligence::recipes::models::RecipeRecord;
use crate::intelligence::recipes::recalls::load_recall_keywords;

/// Configuration and tables shared by every tool
#[derive(Debug, Clone)]
pub struct PlannerResources {
    /// Runtime settings
    pub config: PlannerConfig,
    /// Lookup tables for the deterministic rules
    pub tables: RecipeTables,
}

impl PlannerResources {
    /// Combine configuration with explicit tables
    #[must_use]
    pub const fn new(config: PlannerConfig, tables: RecipeTables) -> Self {
        Self { config, tables }
    }

    /// Default tables, with recall keywords replaced from the configured
    /// keyword file when it can be read
    #[must_use]
    pub fn from_config(config: PlannerConfig) -> Self {
        let mut tables = RecipeTables::default();

        if let Some(path) = &config.recall_file {
            match load_recall_keywords(path) {
                Ok(keywords) => {
                    info!(
                        path = %path.display(),
                        keywords = keywords.len(),
                        "Loaded recall keywords"
                    );
                    tables = tables.with_recall_keywords(keywords);
                }
                Err(e) => warn!(error = %e, "Keeping built-in recall keywords"),
            }
        }

        Self::new(config, tables)
    }

    /// Read the reference dataset fresh from disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::DataUnavailable`] when the file is missing or
    /// unreadable.
    pub fn load_dataset(&self) -> Result<Vec<RecipeRecord>, PlannerError> {
        dataset::load_records(&self.config.dataset_path)
    }
}
