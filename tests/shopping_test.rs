// ABOUTME: Integration tests for shopping list construction from scaled recipes
// ABOUTME: Covers store minimums, categorization, de-duplication, and rendered text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{context_for, init_test_logging, recipe, resources_without_dataset};
use food_planner::config::tables::STORE_MINIMUM_NOTE;
use food_planner::config::RecipeTables;
use food_planner::intelligence::recipes::{
    Quantity, RecipeScaler, ShoppingCategory, ShoppingListBuilder,
};
use food_planner::tools::ToolRegistry;
use serde_json::json;

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_scaled_recipe_renders_grouped_list() {
    let tables = RecipeTables::default();
    let mut lentils = recipe(
        "Lentil Soup",
        30,
        4.6,
        &["1 cup lentils", "1 onion", "2 tbsp butter", "1/2 tsp salt"],
    );
    lentils.servings = 4;
    let scaled = RecipeScaler::new(&tables).scale(lentils, 4, None).unwrap();

    let list = ShoppingListBuilder::new(&tables).build(&scaled.recipe);

    assert_eq!(list.recipe_name, "Lentil Soup");
    assert_eq!(list.servings, 4);
    assert_eq!(list.entry_count(), 4);
    assert_eq!(
        list.formatted_text,
        format!(
            "Shopping list for Lentil Soup (4 servings)\n\
             Produce:\n\
             - 1 onion\n\
             Proteins:\n\
             - 1 cup lentils\n\
             Dairy:\n\
             - 2 tbsp butter\n\
             Pantry:\n\
             - 1 tsp salt ({STORE_MINIMUM_NOTE})\n"
        )
    );
}

#[test]
fn test_adaptation_notes_do_not_leak_into_names() {
    let tables = RecipeTables::default();
    let scaled = RecipeScaler::new(&tables)
        .scale(recipe("Toast", 5, 4.0, &["1 tbsp butter", "1 tsp salt"]), 2, None)
        .unwrap();
    let list = ShoppingListBuilder::new(&tables).build(&scaled.recipe);

    assert_eq!(list.entries_in(ShoppingCategory::Dairy)[0].name, "butter");
    assert_eq!(list.entries_in(ShoppingCategory::Pantry)[0].name, "salt");
    assert!(!list.formatted_text.contains("Health Canada"));
}

#[test]
fn test_first_duplicate_is_kept() {
    let tables = RecipeTables::default();
    let record = recipe("Milky", 5, 4.0, &["2 cups milk", "1 cup milk"]);
    let list = ShoppingListBuilder::new(&tables).build(&record);

    let dairy = list.entries_in(ShoppingCategory::Dairy);
    assert_eq!(dairy.len(), 1);
    assert_eq!(dairy[0].quantity, Quantity::Amount(2.0));
}

#[test]
fn test_every_entry_lands_in_exactly_one_category() {
    let tables = RecipeTables::default();
    let record = recipe(
        "Mixed",
        5,
        4.0,
        &[
            "2 carrots",
            "1 lb chicken thighs",
            "1 cup cheddar cheese",
            "1 cup rice",
            "1 cup frozen peas",
            "1 cup coffee",
            "1 pinch xanthan gum",
        ],
    );
    let list = ShoppingListBuilder::new(&tables).build(&record);

    let total: usize = list.categories.iter().map(|g| g.entries.len()).sum();
    assert_eq!(total, 7);
    let order: Vec<ShoppingCategory> = list.categories.iter().map(|g| g.category).collect();
    assert_eq!(
        order,
        vec![
            ShoppingCategory::Produce,
            ShoppingCategory::Proteins,
            ShoppingCategory::Dairy,
            ShoppingCategory::Pantry,
            ShoppingCategory::Frozen,
            ShoppingCategory::Beverages,
            ShoppingCategory::Other,
        ]
    );
}

#[test]
fn test_to_taste_and_store_minimum_lines() {
    let tables = RecipeTables::default();
    let record = recipe("Omelette", 10, 4.0, &["2 eggs", "salt to taste"]);
    let list = ShoppingListBuilder::new(&tables).build(&record);

    assert!(list
        .formatted_text
        .contains(&format!("- 6 eggs ({STORE_MINIMUM_NOTE})")));
    assert!(list.formatted_text.contains("- salt (to taste)"));

    let pantry = list.entries_in(ShoppingCategory::Pantry);
    assert_eq!(pantry[0].quantity, Quantity::ToTaste);
    assert_eq!(pantry[0].note, None);
}

#[test]
fn test_count_word_without_amount_stays_in_text() {
    let tables = RecipeTables::default();
    let record = recipe("Popcorn", 5, 4.0, &["pinch of salt", "1/2 cup popcorn kernels"]);
    let list = ShoppingListBuilder::new(&tables).build(&record);

    let salt = &list.entries_in(ShoppingCategory::Pantry)[0];
    assert_eq!(salt.name, "salt");
    assert_eq!(salt.quantity, Quantity::ToTaste);
    assert_eq!(salt.unit.as_deref(), Some("pinch"));
    assert!(list.formatted_text.contains("- pinch salt (to taste)\n"));
}

#[test]
fn test_eggplant_is_produce_without_egg_minimum() {
    let tables = RecipeTables::default();
    let record = recipe("Baba Ganoush", 45, 4.5, &["1 eggplant, halved", "1 egg"]);
    let list = ShoppingListBuilder::new(&tables).build(&record);

    let produce = list.entries_in(ShoppingCategory::Produce);
    assert_eq!(produce.len(), 1);
    assert_eq!(produce[0].name, "eggplant");
    assert_eq!(produce[0].quantity, Quantity::Amount(1.0));
    assert_eq!(produce[0].note, None);
    assert!(list.formatted_text.contains("- 1 eggplant\n"));
    assert!(list
        .formatted_text
        .contains(&format!("- 6 egg ({STORE_MINIMUM_NOTE})")));
}

#[test]
fn test_empty_ingredients_give_header_only() {
    let tables = RecipeTables::default();
    let record = recipe("Air", 0, 4.0, &[]);
    let list = ShoppingListBuilder::new(&tables).build(&record);
    assert_eq!(list.entry_count(), 0);
    assert_eq!(list.formatted_text, "Shopping list for Air (2 servings)\n");
}

// ============================================================================
// prepare_shopping_list tool
// ============================================================================

#[tokio::test]
async fn test_tool_builds_list_from_recipe_argument() {
    init_test_logging();
    let resources = resources_without_dataset();
    let registry = ToolRegistry::with_builtin_tools();

    let result = registry
        .execute(
            "prepare_shopping_list",
            json!({"recipe": recipe("Salad", 10, 4.2, &["2 cups romaine lettuce", "1 tomato"])}),
            &context_for(&resources),
        )
        .await
        .unwrap();

    assert!(!result.is_error);
    assert_eq!(result.content["recipe_name"], json!("Salad"));
    let text = result.content["formatted_text"].as_str().unwrap();
    assert!(text.starts_with("Shopping list for Salad (2 servings)\nProduce:\n"));
    assert!(text.contains("- 2 cup romaine lettuce"));
    assert!(text.contains("- 1 tomato"));
}

#[tokio::test]
async fn test_tool_accepts_bare_recipe_object() {
    init_test_logging();
    let resources = resources_without_dataset();
    let registry = ToolRegistry::with_builtin_tools();

    let result = registry
        .execute(
            "prepare_shopping_list",
            json!({"recipe_name": "Tea", "servings": 1, "ingredients": ["1 tea bag", "1 cup water"]}),
            &context_for(&resources),
        )
        .await
        .unwrap();

    assert!(!result.is_error);
    assert_eq!(result.content["recipe_name"], json!("Tea"));
}

#[tokio::test]
async fn test_tool_reports_missing_recipe() {
    init_test_logging();
    let resources = resources_without_dataset();
    let registry = ToolRegistry::with_builtin_tools();

    let result = registry
        .execute("prepare_shopping_list", json!({}), &context_for(&resources))
        .await
        .unwrap();

    assert!(result.is_error);
    assert!(result.content["error"].as_str().is_some());
}
