// ABOUTME: Module containing the planner tool implementations organized by category.
// ABOUTME: Recipe selection and scaling, recall safety, and shopping list tools.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `recipes` - `fetch_local_recipe`, `get_local_recipe_type`, `modify_recipe`
//! - `safety` - `check_cfia_recalls`
//! - `shopping` - `prepare_shopping_list`
//!
//! `search_web` is served by the agent runtime and has no local implementation.

use super::traits::McpTool;

/// Local recipe lookup and scaling tools
pub mod recipes;
/// Food recall check
pub mod safety;
/// Shopping list preparation
pub mod shopping;

/// Create the recipe tools
#[must_use]
pub fn create_recipe_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(recipes::FetchLocalRecipeTool),
        Box::new(recipes::GetLocalRecipeTypeTool),
        Box::new(recipes::ModifyRecipeTool),
    ]
}

/// Create the safety tools
#[must_use]
pub fn create_safety_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(safety::CheckCfiaRecallsTool)]
}

/// Create the shopping tools
#[must_use]
pub fn create_shopping_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(shopping::PrepareShoppingListTool)]
}
