// ABOUTME: Tool identifier constants to eliminate hardcoded tool names
// ABOUTME: Names of the recipe planning tools callable by the agent runtime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Select the best local recipe for a set of constraints
pub const FETCH_LOCAL_RECIPE: &str = "fetch_local_recipe";

/// Check ingredients against the food recall list
pub const CHECK_CFIA_RECALLS: &str = "check_cfia_recalls";

/// Scale a recipe to a target serving count
pub const MODIFY_RECIPE: &str = "modify_recipe";

/// Build a categorized shopping list from a recipe
pub const PREPARE_SHOPPING_LIST: &str = "prepare_shopping_list";

/// List the recipe types available in the local dataset
pub const GET_LOCAL_RECIPE_TYPE: &str = "get_local_recipe_type";

/// Web search fallback owned by the orchestrator, never served here
pub const SEARCH_WEB: &str = "search_web";

/// Every tool served by this crate
pub const ALL_TOOLS: [&str; 5] = [
    FETCH_LOCAL_RECIPE,
    CHECK_CFIA_RECALLS,
    MODIFY_RECIPE,
    PREPARE_SHOPPING_LIST,
    GET_LOCAL_RECIPE_TYPE,
];
