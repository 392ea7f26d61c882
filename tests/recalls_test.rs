// ABOUTME: Integration tests for the recall safety check and its tool wrapper
// ABOUTME: Verifies PASS / FAIL / ERROR payloads and recall keyword files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use common::{context_for, init_test_logging, resources_without_dataset};
use food_planner::config::{PlannerConfig, RecipeTables};
use food_planner::errors::PlannerError;
use food_planner::intelligence::recipes::{load_recall_keywords, RecallChecker, RecallStatus};
use food_planner::mcp::PlannerResources;
use food_planner::tools::ToolRegistry;
use serde_json::json;
use tempfile::NamedTempFile;

// ============================================================================
// Checker
// ============================================================================

#[test]
fn test_romaine_fails_and_carrots_pass() {
    let tables = RecipeTables::default();
    let status = RecallChecker::new(&tables.recall_keywords).check(&["Romaine lettuce", "Carrots"]);
    assert_eq!(status, RecallStatus::Fail(vec!["Romaine lettuce".to_owned()]));
    assert_eq!(status.to_payload(), "FAIL: ['Romaine lettuce']");
}

#[test]
fn test_clean_list_passes() {
    let tables = RecipeTables::default();
    let status = RecallChecker::new(&tables.recall_keywords).check(&["carrots", "lentils"]);
    assert!(status.is_pass());
    assert_eq!(status.to_payload(), "PASS");
}

#[test]
fn test_empty_list_passes() {
    let tables = RecipeTables::default();
    let empty: [&str; 0] = [];
    assert!(RecallChecker::new(&tables.recall_keywords).check(&empty).is_pass());
}

#[test]
fn test_matches_keep_input_order_and_casing() {
    let tables = RecipeTables::default();
    let status = RecallChecker::new(&tables.recall_keywords).check(&[
        "ENOKI mushrooms",
        "rice",
        "Cantaloupe, cubed",
    ]);
    assert_eq!(
        status.to_payload(),
        "FAIL: ['ENOKI mushrooms', 'Cantaloupe, cubed']"
    );
}

#[test]
fn test_apostrophes_switch_to_double_quotes() {
    let keywords = vec!["romaine".to_owned()];
    let status = RecallChecker::new(&keywords).check(&["farmer's romaine"]);
    assert_eq!(status.to_payload(), "FAIL: [\"farmer's romaine\"]");
}

#[test]
fn test_non_list_argument_is_an_error() {
    let tables = RecipeTables::default();
    let checker = RecallChecker::new(&tables.recall_keywords);

    let status = checker.check_value(&json!("romaine"));
    assert!(matches!(status, RecallStatus::Error(_)));
    assert!(status.to_payload().starts_with("ERROR: "));

    let status = checker.check_value(&json!(["romaine", 3]));
    assert!(matches!(status, RecallStatus::Error(_)));
}

#[test]
fn test_json_encoded_list_is_accepted() {
    let tables = RecipeTables::default();
    let status = RecallChecker::new(&tables.recall_keywords)
        .check_value(&json!(r#"["cantaloupe", "kiwi"]"#));
    assert_eq!(status.to_payload(), "FAIL: ['cantaloupe']");
}

// ============================================================================
// Keyword files
// ============================================================================

#[test]
fn test_keyword_file_skips_comments_and_blanks() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# current recalls\n  Alfalfa Sprouts \n\nflour").unwrap();

    let keywords = load_recall_keywords(file.path()).unwrap();
    assert_eq!(keywords, vec!["alfalfa sprouts", "flour"]);
}

#[test]
fn test_missing_keyword_file_is_unavailable() {
    let result = load_recall_keywords(Path::new("/nonexistent/recalls.txt"));
    assert!(matches!(result, Err(PlannerError::DataUnavailable { .. })));
}

// ============================================================================
// check_cfia_recalls tool
// ============================================================================

#[tokio::test]
async fn test_tool_payloads() {
    init_test_logging();
    let resources = resources_without_dataset();
    let registry = ToolRegistry::with_builtin_tools();
    let context = context_for(&resources);

    let fail = registry
        .execute(
            "check_cfia_recalls",
            json!({"ingredient_list": ["Romaine lettuce", "Carrots"]}),
            &context,
        )
        .await
        .unwrap();
    assert!(!fail.is_error);
    assert_eq!(fail.as_text(), Some("FAIL: ['Romaine lettuce']"));

    let pass = registry
        .execute("check_cfia_recalls", json!({"ingredient_list": ["carrots"]}), &context)
        .await
        .unwrap();
    assert_eq!(pass.as_text(), Some("PASS"));

    let missing = registry
        .execute("check_cfia_recalls", json!({}), &context)
        .await
        .unwrap();
    assert!(missing.is_error);
    assert_eq!(
        missing.as_text(),
        Some("ERROR: missing ingredient_list argument")
    );
}

#[tokio::test]
async fn test_tool_uses_configured_keyword_file() {
    init_test_logging();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "spinach").unwrap();

    let resources = Arc::new(PlannerResources::from_config(
        PlannerConfig::default().with_recall_file(file.path()),
    ));
    let registry = ToolRegistry::with_builtin_tools();

    let result = registry
        .execute(
            "check_cfia_recalls",
            json!({"ingredient_list": ["baby spinach", "romaine"]}),
            &context_for(&resources),
        )
        .await
        .unwrap();
    assert_eq!(result.as_text(), Some("FAIL: ['baby spinach']"));
}
