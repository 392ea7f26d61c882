// ABOUTME: Configuration module for the recipe planner
// ABOUTME: Environment settings and the injectable lookup tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! - **Environment**: dataset path, rating floor, and recall file from env vars
//! - **Tables**: keyword and threshold tables behind every deterministic rule

/// Environment configuration
pub mod environment;
/// Lookup tables with built-in defaults
pub mod tables;

pub use environment::PlannerConfig;
pub use tables::RecipeTables;
