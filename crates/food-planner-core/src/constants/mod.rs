// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Tool identifiers, wire-format sentinels, and pipeline defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Tool identifiers exposed over the tool-call boundary
pub mod tools;

/// Text sentinels the orchestrator branches on
pub mod sentinels;

/// Numeric defaults for the recipe pipeline
pub mod pipeline {
    /// Minutes reported for durations that cannot be parsed.
    ///
    /// Large enough to fail any realistic time ceiling.
    pub const UNKNOWN_DURATION_MINUTES: u32 = 9999;

    /// Minimum rating a recipe needs to be selected
    pub const DEFAULT_MIN_RATING: f64 = 3.5;

    /// Relative path of the reference recipe dataset
    pub const DEFAULT_DATASET_PATH: &str = "recipe_dataset.csv";

    /// Decimal places kept after scaling a quantity
    pub const SCALED_QUANTITY_DECIMALS: i32 = 2;
}

/// Service identity used in logs and the `initialize` handshake
pub mod service {
    /// Service name
    pub const FOOD_PLANNER: &str = "food-planner";
}

pub use tools::*;
