// ABOUTME: Unit tests for environment-driven planner and logging configuration
// ABOUTME: Runs serially because each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use food_planner::config::environment::{DATASET_PATH_ENV, MIN_RATING_ENV, RECALL_FILE_ENV};
use food_planner::config::PlannerConfig;
use food_planner::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

fn clear_planner_env() {
    env::remove_var(DATASET_PATH_ENV);
    env::remove_var(MIN_RATING_ENV);
    env::remove_var(RECALL_FILE_ENV);
}

// ============================================================================
// PlannerConfig
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_planner_env();
    let config = PlannerConfig::from_env();

    assert_eq!(config.dataset_path, PathBuf::from("recipe_dataset.csv"));
    assert!((config.min_rating - 3.5).abs() < f64::EPSILON);
    assert_eq!(config.recall_file, None);
    assert_eq!(config, PlannerConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_planner_env();
    env::set_var(DATASET_PATH_ENV, "/data/recipes.csv");
    env::set_var(MIN_RATING_ENV, " 4.25 ");
    env::set_var(RECALL_FILE_ENV, "/data/recalls.txt");

    let config = PlannerConfig::from_env();
    clear_planner_env();

    assert_eq!(config.dataset_path, PathBuf::from("/data/recipes.csv"));
    assert!((config.min_rating - 4.25).abs() < f64::EPSILON);
    assert_eq!(config.recall_file, Some(PathBuf::from("/data/recalls.txt")));
}

#[test]
#[serial]
fn test_invalid_rating_falls_back_to_default() {
    clear_planner_env();
    env::set_var(MIN_RATING_ENV, "excellent");
    let config = PlannerConfig::from_env();
    clear_planner_env();

    assert!((config.min_rating - 3.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_blank_values_are_ignored() {
    clear_planner_env();
    env::set_var(DATASET_PATH_ENV, "   ");
    env::set_var(RECALL_FILE_ENV, "");
    let config = PlannerConfig::from_env();
    clear_planner_env();

    assert_eq!(config.dataset_path, PathBuf::from("recipe_dataset.csv"));
    assert_eq!(config.recall_file, None);
}

#[test]
fn test_builders_replace_fields() {
    let config = PlannerConfig::default()
        .with_dataset_path("fixtures/small.csv")
        .with_min_rating(4.0)
        .with_recall_file("fixtures/recalls.txt");

    assert_eq!(config.dataset_path, PathBuf::from("fixtures/small.csv"));
    assert!((config.min_rating - 4.0).abs() < f64::EPSILON);
    assert_eq!(config.recall_file, Some(PathBuf::from("fixtures/recalls.txt")));
}

// ============================================================================
// LoggingConfig
// ============================================================================

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "food-planner");
}

#[test]
#[serial]
fn test_logging_defaults_to_pretty() {
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    let config = LoggingConfig::from_env();

    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
}
