// ABOUTME: Integration tests for the free-text field parsers used across the pipeline
// ABOUTME: Durations, nutrition summaries, leading quantities, and list-valued cells
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::BTreeMap;

use food_planner::intelligence::recipes::text::{
    format_display_quantity, format_scaled_quantity, nutrient_value, numeric_value,
    parse_duration, parse_leading_quantity, parse_nutrient, parse_time_field, split_list_field,
};
use food_planner::intelligence::recipes::{NutrientKey, NutritionField, TimeField};
use food_planner_core::constants::pipeline::UNKNOWN_DURATION_MINUTES;
use serde_json::json;

const SUMMARY: &str = "Calories: 120, Total Fat 9g, Sodium 150mg, Protein 2g";

// ============================================================================
// Durations
// ============================================================================

#[test]
fn test_duration_sums_units() {
    assert_eq!(parse_duration("1 hr 30 mins"), 90);
    assert_eq!(parse_duration("2 hrs"), 120);
    assert_eq!(parse_duration("1.5 hours"), 90);
    assert_eq!(parse_duration("1 day 2 hours"), 1560);
    assert_eq!(parse_duration("45minutes"), 45);
}

#[test]
fn test_duration_fractions_and_leading_dot() {
    assert_eq!(parse_duration("1 1/2 hours"), 90);
    assert_eq!(parse_duration("1/2 hr"), 30);
    assert_eq!(parse_duration(".5 hours"), 30);
    assert_eq!(parse_duration("Cook 2 1/2 hrs, rest 1/4 hour"), 165);
    assert_eq!(parse_duration("3/4 day"), 1080);
}

#[test]
fn test_duration_zero_denominator_is_unknown() {
    assert_eq!(parse_duration("1/0 hr"), UNKNOWN_DURATION_MINUTES);
    assert_eq!(parse_duration("1 hr 1 1/0 mins"), UNKNOWN_DURATION_MINUTES);
}

#[test]
fn test_bare_digits_are_minutes() {
    assert_eq!(parse_duration("45"), 45);
    assert_eq!(parse_duration(" 0 "), 0);
}

#[test]
fn test_unparseable_duration_is_unknown() {
    assert_eq!(parse_duration(""), UNKNOWN_DURATION_MINUTES);
    assert_eq!(parse_duration("about an hour"), UNKNOWN_DURATION_MINUTES);
    assert_eq!(parse_duration("-5"), UNKNOWN_DURATION_MINUTES);
}

#[test]
fn test_time_field_variants() {
    assert_eq!(parse_time_field(Some(&TimeField::Minutes(25))), 25);
    assert_eq!(
        parse_time_field(Some(&TimeField::Text("1 hr".to_owned()))),
        60
    );
    assert_eq!(
        parse_time_field(Some(&TimeField::Minutes(-1))),
        UNKNOWN_DURATION_MINUTES
    );
    assert_eq!(parse_time_field(None), UNKNOWN_DURATION_MINUTES);
}

// ============================================================================
// Nutrition
// ============================================================================

#[test]
fn test_nutrient_labels_in_summary() {
    assert!((parse_nutrient(SUMMARY, NutrientKey::Calories) - 120.0).abs() < f64::EPSILON);
    assert!((parse_nutrient(SUMMARY, NutrientKey::Fat) - 9.0).abs() < f64::EPSILON);
    assert!((parse_nutrient(SUMMARY, NutrientKey::Sodium) - 150.0).abs() < f64::EPSILON);
    assert!((parse_nutrient(SUMMARY, NutrientKey::Protein) - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_nutrient_is_zero() {
    assert!(parse_nutrient(SUMMARY, NutrientKey::Carbohydrates).abs() < f64::EPSILON);
    assert!(parse_nutrient("", NutrientKey::Sodium).abs() < f64::EPSILON);
}

#[test]
fn test_nutrient_with_unit_in_parentheses() {
    assert!((parse_nutrient("Sodium (mg): 281", NutrientKey::Sodium) - 281.0).abs() < f64::EPSILON);
    assert!((parse_nutrient("{'sodium': 42}", NutrientKey::Sodium) - 42.0).abs() < f64::EPSILON);
}

#[test]
fn test_nutrient_from_structured_facts() {
    let mut facts = BTreeMap::new();
    facts.insert("Sodium".to_owned(), json!("281mg"));
    facts.insert("total_fat".to_owned(), json!(12.5));
    let field = NutritionField::Facts(facts);

    assert!((nutrient_value(Some(&field), NutrientKey::Sodium) - 281.0).abs() < f64::EPSILON);
    assert!((nutrient_value(Some(&field), NutrientKey::Fat) - 12.5).abs() < f64::EPSILON);
    assert!(nutrient_value(Some(&field), NutrientKey::Protein).abs() < f64::EPSILON);
    assert!(nutrient_value(None, NutrientKey::Sodium).abs() < f64::EPSILON);
}

#[test]
fn test_numeric_value_reads_prefixes() {
    assert!((numeric_value(&json!(7)) - 7.0).abs() < f64::EPSILON);
    assert!((numeric_value(&json!(" 3.5 g")) - 3.5).abs() < f64::EPSILON);
    assert!(numeric_value(&json!("n/a")).abs() < f64::EPSILON);
}

// ============================================================================
// Quantities
// ============================================================================

#[test]
fn test_leading_quantity_forms() {
    let mixed = parse_leading_quantity("1 1/2 cups flour").unwrap();
    assert!((mixed.value - 1.5).abs() < f64::EPSILON);
    assert_eq!(&"1 1/2 cups flour"[mixed.end..], " cups flour");

    let fraction = parse_leading_quantity("3/4 cup sugar").unwrap();
    assert!((fraction.value - 0.75).abs() < f64::EPSILON);

    let decimal = parse_leading_quantity("  .5 tsp salt").unwrap();
    assert!((decimal.value - 0.5).abs() < f64::EPSILON);
    assert_eq!(decimal.start, 2);

    let integer = parse_leading_quantity("2 eggs").unwrap();
    assert!((integer.value - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_no_leading_quantity() {
    assert!(parse_leading_quantity("salt to taste").is_none());
    assert!(parse_leading_quantity("1/0 cup water").is_none());
    assert!(parse_leading_quantity("").is_none());
}

#[test]
fn test_quantity_formatting() {
    assert_eq!(format_scaled_quantity(2.0), "2.0");
    assert_eq!(format_scaled_quantity(4.0 / 3.0), "1.33");
    assert_eq!(format_scaled_quantity(0.125), "0.13");
    assert_eq!(format_display_quantity(2.0), "2");
    assert_eq!(format_display_quantity(0.5), "0.5");
}

// ============================================================================
// List cells
// ============================================================================

#[test]
fn test_list_field_formats() {
    assert_eq!(split_list_field(r#"["1 egg", "2 cups milk"]"#), vec!["1 egg", "2 cups milk"]);
    assert_eq!(split_list_field("['a', 'b']"), vec!["a", "b"]);
    assert_eq!(split_list_field("a\nb\n"), vec!["a", "b"]);
    assert_eq!(split_list_field("a | b"), vec!["a", "b"]);
    assert_eq!(split_list_field("salt, pepper"), vec!["salt", "pepper"]);
    assert_eq!(split_list_field("one item"), vec!["one item"]);
    assert!(split_list_field("   ").is_empty());
}
