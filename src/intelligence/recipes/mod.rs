// ABOUTME: Recipe pipeline module: normalizer, filter, recall check, scaler, shopping list
// ABOUTME: Deterministic stages invoked by the planner tools, leaves first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! The deterministic half of the planner. An agent runtime drives the
//! conversation and calls into these stages through the tool layer.
//!
//! ## Data Flow
//!
//! ```text
//! dataset ─▶ text (normalize) ─▶ filter ─▶ recalls
//!                                      └─▶ scaling ─▶ shopping
//! ```
//!
//! Each stage is pure with respect to its inputs and the injected
//! [`RecipeTables`](crate::config::tables::RecipeTables).
//!
//! ## Example Usage
//!
//! ```text
//! use food_planner::config::RecipeTables;
//! use food_planner::intelligence::recipes::{QueryParams, RecipeFilter, RecipeScaler};
//!
//! let tables = RecipeTables::default();
//! let (recipe, _trace) = RecipeFilter::new(&tables, 3.5)
//!     .select_best(records, &QueryParams::new(30))?;
//! let scaled = RecipeScaler::new(&tables).scale(recipe, 4, None)?;
//! ```

/// Priority allergen detection
pub mod allergens;
/// Multi-stage constraint filter
pub mod filter;
/// Recipe, query, and shopping list models
pub mod models;
/// Recall safety checker
pub mod recalls;
/// Serving-size scaler
pub mod scaling;
/// Shopping list builder
pub mod shopping;
/// Free-text field parsers
pub mod text;
/// Measurement unit recognition
pub mod units;

pub use allergens::flag_allergens;
pub use filter::{no_match_message, FilterOutcome, FilterTrace, RecipeFilter};
pub use models::{
    CategoryGroup, DietaryRestriction, IngredientLine, NutrientConstraints, NutrientDirection,
    NutrientKey, NutritionField, Quantity, QueryParams, RecipeRecord, ShoppingCategory,
    ShoppingEntry, ShoppingList, TimeField,
};
pub use recalls::{load_recall_keywords, RecallChecker, RecallStatus};
pub use scaling::{parse_target_servings, RecipeScaler, ScaledRecipe};
pub use shopping::{NormalizedQuantity, ShoppingListBuilder};
pub use text::{parse_duration, parse_nutrient};
pub use units::IngredientUnit;
