// ABOUTME: Shopping list tool building a categorized list from a scaled recipe.
// ABOUTME: Implements prepare_shopping_list.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde_json::{json, Value};

use food_planner_core::constants::tools::PREPARE_SHOPPING_LIST;

use crate::errors::AppResult;
use crate::intelligence::recipes::ShoppingListBuilder;
use crate::logging::ToolLogger;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Tool producing a store-ready shopping list.
pub struct PrepareShoppingListTool;

#[async_trait]
impl McpTool for PrepareShoppingListTool {
    fn name(&self) -> &'static str {
        PREPARE_SHOPPING_LIST
    }

    fn description(&self) -> &'static str {
        "Build a shopping list grouped by store section from a (scaled) recipe, rounding \
         amounts up to what a store sells"
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![(
                "recipe",
                PropertySchema::new(
                    "object",
                    "Recipe as returned by modify_recipe (object or JSON string)",
                ),
            )],
            &["recipe"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::SHOPPING
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        // Callers sometimes pass the recipe itself as the arguments object
        let recipe = match args.get("recipe") {
            Some(recipe) => recipe,
            None if args.get("ingredients").is_some() => &args,
            None => {
                return Ok(ToolResult::error(json!({ "error": "missing recipe argument" })));
            }
        };

        match ShoppingListBuilder::new(&context.resources.tables).build_from_value(recipe) {
            Ok(list) => Ok(ToolResult::from_serializable(&list)?),
            Err(e) => {
                let reason = e.to_string();
                ToolLogger::log_fallback_signal(self.name(), &context.request_id_str(), &reason);
                Ok(ToolResult::error(json!({ "error": reason })))
            }
        }
    }
}
