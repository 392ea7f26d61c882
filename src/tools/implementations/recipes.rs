// ABOUTME: Recipe tools for local selection, recipe type discovery, and serving-size scaling.
// ABOUTME: Implements fetch_local_recipe, get_local_recipe_type, modify_recipe.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Tools
//!
//! - `FetchLocalRecipeTool` - Best local recipe for a set of constraints
//! - `GetLocalRecipeTypeTool` - Recipe types present in the dataset
//! - `ModifyRecipeTool` - Scale a recipe to a serving count
//!
//! Pipeline failures are returned as sentinel payloads, never as errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::task;

use food_planner_core::constants::sentinels::{
    ERROR_PREFIX, LOCAL_SOURCE, MODIFY_RECIPE_ERROR_PREFIX,
};
use food_planner_core::constants::tools::{
    FETCH_LOCAL_RECIPE, GET_LOCAL_RECIPE_TYPE, MODIFY_RECIPE,
};

use crate::dataset;
use crate::errors::{AppResult, PlannerError, ToolError};
use crate::intelligence::recipes::models::{QueryParams, RecipeRecord};
use crate::intelligence::recipes::{
    flag_allergens, no_match_message, parse_target_servings, RecipeFilter, RecipeScaler,
};
use crate::logging::ToolLogger;
use crate::mcp::resources::PlannerResources;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

// ============================================================================
// Helper functions
// ============================================================================

/// Read the dataset off the async runtime's worker threads
async fn load_dataset(
    tool: &str,
    resources: Arc<PlannerResources>,
) -> AppResult<Result<Vec<RecipeRecord>, PlannerError>> {
    task::spawn_blocking(move || resources.load_dataset())
        .await
        .map_err(|e| ToolError::worker_failed(tool, e.to_string()).into())
}

// ============================================================================
// FetchLocalRecipeTool
// ============================================================================

/// Tool selecting the highest-rated local recipe that satisfies the query.
pub struct FetchLocalRecipeTool;

#[async_trait]
impl McpTool for FetchLocalRecipeTool {
    fn name(&self) -> &'static str {
        FETCH_LOCAL_RECIPE
    }

    fn description(&self) -> &'static str {
        "Find the highest-rated recipe in the local dataset that fits a time limit, dietary \
         restrictions, an optional recipe type, and nutrient limits. Returns NO_MATCH when \
         nothing fits; use search_web in that case."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "max_total_time",
                    PropertySchema::new("number", "Maximum total time in minutes"),
                ),
                (
                    "dietary_restrictions",
                    PropertySchema::string_array(
                        "Restrictions: vegetarian, vegan, pescatarian, gluten_free, dairy_free, nut_free",
                    ),
                ),
                (
                    "recipe_type",
                    PropertySchema::new("string", "Text to match in the cuisine path, e.g. Soups"),
                ),
                (
                    "constraints",
                    PropertySchema::new(
                        "object",
                        "Nutrient limits keyed by calories, sodium, fat, protein, carbohydrates. \
                         Protein is a minimum, the others are maximums.",
                    ),
                ),
            ],
            &["max_total_time"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATASET | ToolCapabilities::EMITS_SENTINEL
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let request_id = context.request_id_str();

        let params = match QueryParams::from_value(&args) {
            Ok(params) => params,
            Err(e) => {
                let payload = format!("{ERROR_PREFIX}: {e}");
                ToolLogger::log_fallback_signal(self.name(), &request_id, &payload);
                return Ok(ToolResult::error_text(payload));
            }
        };

        let resources = Arc::clone(&context.resources);
        let selection = load_dataset(self.name(), Arc::clone(&resources))
            .await?
            .and_then(|records| {
                RecipeFilter::new(&resources.tables, resources.config.min_rating)
                    .select_best(records, &params)
            });

        match selection {
            Ok((recipe, trace)) => {
                let allergens = flag_allergens(&resources.tables, &recipe.ingredients);
                Ok(ToolResult::ok(json!({
                    "source": LOCAL_SOURCE,
                    "recipe": recipe,
                    "priority_allergens": allergens,
                    "filter_trace": trace,
                })))
            }
            Err(e) => {
                let payload = no_match_message(&e);
                ToolLogger::log_fallback_signal(self.name(), &request_id, &payload);
                Ok(ToolResult::text(payload))
            }
        }
    }
}

// ============================================================================
// GetLocalRecipeTypeTool
// ============================================================================

/// Tool listing the top-level recipe types in the dataset.
pub struct GetLocalRecipeTypeTool;

#[async_trait]
impl McpTool for GetLocalRecipeTypeTool {
    fn name(&self) -> &'static str {
        GET_LOCAL_RECIPE_TYPE
    }

    fn description(&self) -> &'static str {
        "List the recipe types available in the local dataset, taken from the first segment \
         of each cuisine path and sorted alphabetically"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(Vec::new(), &[])
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::READS_DATASET
    }

    async fn execute(&self, _args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        match load_dataset(self.name(), Arc::clone(&context.resources)).await? {
            Ok(records) => Ok(ToolResult::ok(json!(dataset::recipe_types(&records)))),
            Err(e) => {
                let payload = format!("{ERROR_PREFIX}: {e}");
                ToolLogger::log_fallback_signal(self.name(), &context.request_id_str(), &payload);
                Ok(ToolResult::error_text(payload))
            }
        }
    }
}

// ============================================================================
// ModifyRecipeTool
// ============================================================================

/// Tool scaling a recipe to a target serving count with health adaptation notes.
pub struct ModifyRecipeTool;

impl ModifyRecipeTool {
    fn scale(args: &Value, resources: &PlannerResources) -> Result<Value, PlannerError> {
        let recipe = args
            .get("recipe")
            .ok_or_else(|| PlannerError::malformed("missing recipe argument"))?;
        let record = RecipeRecord::from_tool_value(recipe)?;
        let target_servings = parse_target_servings(args.get("target_servings"))?;
        let health_goal = args.get("health_goal").and_then(Value::as_str);

        let scaled =
            RecipeScaler::new(&resources.tables).scale(record, target_servings, health_goal)?;
        serde_json::to_value(&scaled)
            .map_err(|e| PlannerError::malformed(format!("scaled recipe is not serializable: {e}")))
    }
}

#[async_trait]
impl McpTool for ModifyRecipeTool {
    fn name(&self) -> &'static str {
        MODIFY_RECIPE
    }

    fn description(&self) -> &'static str {
        "Scale a recipe's ingredient quantities to a target number of servings and add Health \
         Canada notes for salt and saturated fats"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![
                (
                    "recipe",
                    PropertySchema::new(
                        "object",
                        "Recipe as returned by fetch_local_recipe (object or JSON string)",
                    ),
                ),
                (
                    "target_servings",
                    PropertySchema::new("integer", "Number of servings to scale to"),
                ),
                (
                    "health_goal",
                    PropertySchema::new("string", "Optional health goal, echoed in the result"),
                ),
            ],
            &["recipe", "target_servings"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::TRANSFORMS_RECIPE | ToolCapabilities::EMITS_SENTINEL
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        match Self::scale(&args, &context.resources) {
            Ok(scaled) => Ok(ToolResult::ok(scaled)),
            Err(e) => {
                let payload = format!("{MODIFY_RECIPE_ERROR_PREFIX}: {e}");
                ToolLogger::log_fallback_signal(self.name(), &context.request_id_str(), &payload);
                Ok(ToolResult::error_text(payload))
            }
        }
    }
}
