// ABOUTME: Food safety tool checking ingredients against the recall keyword list.
// ABOUTME: Implements check_cfia_recalls.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde_json::Value;

use food_planner_core::constants::tools::CHECK_CFIA_RECALLS;

use crate::errors::AppResult;
use crate::intelligence::recipes::{RecallChecker, RecallStatus};
use crate::logging::ToolLogger;
use crate::mcp::schema::{JsonSchema, PropertySchema};
use crate::tools::context::ToolExecutionContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolCapabilities};

/// Tool flagging ingredients that match an active food recall.
pub struct CheckCfiaRecallsTool;

#[async_trait]
impl McpTool for CheckCfiaRecallsTool {
    fn name(&self) -> &'static str {
        CHECK_CFIA_RECALLS
    }

    fn description(&self) -> &'static str {
        "Check ingredient names against current Canadian food recalls. Returns PASS, \
         FAIL: [matched ingredients], or ERROR: reason."
    }

    fn input_schema(&self) -> JsonSchema {
        JsonSchema::object(
            vec![(
                "ingredient_list",
                PropertySchema::string_array("Ingredient names or lines to check"),
            )],
            &["ingredient_list"],
        )
    }

    fn capabilities(&self) -> ToolCapabilities {
        ToolCapabilities::SAFETY | ToolCapabilities::EMITS_SENTINEL
    }

    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult> {
        let checker = RecallChecker::new(&context.resources.tables.recall_keywords);
        let status = args
            .get("ingredient_list")
            .or_else(|| args.get("ingredients"))
            .map_or_else(
                || RecallStatus::Error("missing ingredient_list argument".to_owned()),
                |list| checker.check_value(list),
            );

        let payload = status.to_payload();
        match status {
            RecallStatus::Pass => Ok(ToolResult::text(payload)),
            RecallStatus::Fail(_) => {
                ToolLogger::log_fallback_signal(self.name(), &context.request_id_str(), &payload);
                Ok(ToolResult::text(payload))
            }
            RecallStatus::Error(_) => {
                ToolLogger::log_fallback_signal(self.name(), &context.request_id_str(), &payload);
                Ok(ToolResult::error_text(payload))
            }
        }
    }
}
