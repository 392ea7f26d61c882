// ABOUTME: The McpTool trait every planner tool implements, and its capability flags
// ABOUTME: Capabilities drive registry queries and the registration log line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool trait
//!
//! Pipeline failures never escape [`McpTool::execute`] as errors. They are
//! rendered into the payload as sentinels, so the only `Err` a tool returns
//! is one the protocol itself has to report.

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::JsonSchema;

use super::context::ToolExecutionContext;
use super::result::ToolResult;

bitflags! {
    /// What a tool touches and how its payload should be read.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Reads the recipe CSV
        const READS_DATASET = 1;
        /// Screens ingredients against recalls
        const SAFETY = 1 << 1;
        /// Rewrites a recipe it is handed
        const TRANSFORMS_RECIPE = 1 << 2;
        /// Builds a shopping list
        const SHOPPING = 1 << 3;
        /// May answer `NO_MATCH`, `FAIL: [...]` or `ERROR: ...` instead of data
        const EMITS_SENTINEL = 1 << 4;
    }
}

impl ToolCapabilities {
    /// Lowercase flag names joined with `|`, or `none`
    #[must_use]
    pub fn describe(self) -> String {
        if self.is_empty() {
            return "none".to_owned();
        }
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// A callable pipeline stage.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Wire name, e.g. `fetch_local_recipe`
    fn name(&self) -> &'static str;

    /// Description shown to the model in `tools/list`
    fn description(&self) -> &'static str;

    /// Argument schema
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags
    fn capabilities(&self) -> ToolCapabilities;

    /// Run the stage on decoded JSON arguments
    ///
    /// # Errors
    ///
    /// Only for failures no payload can carry, such as a crashed worker task
    /// or a result that does not serialize
    async fn execute(&self, args: Value, context: &ToolExecutionContext) -> AppResult<ToolResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lists_flags_in_declaration_order() {
        let caps = ToolCapabilities::EMITS_SENTINEL | ToolCapabilities::READS_DATASET;
        assert_eq!(caps.describe(), "reads_dataset|emits_sentinel");
        assert_eq!(ToolCapabilities::empty().describe(), "none");
    }
}
