// ABOUTME: Name-keyed registry of planner tools with schema listing and timed dispatch
// ABOUTME: Built once at startup; read-only afterwards so calls share it without locks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Tools are keyed by name in a `BTreeMap`, so `tools/list` and capability
//! queries come out in a stable alphabetical order without extra sorting.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{AppResult, ToolError};
use crate::logging::ToolLogger;
use crate::mcp::schema::ToolSchema;

use super::context::ToolExecutionContext;
use super::implementations::{create_recipe_tools, create_safety_tools, create_shopping_tools};
use super::result::ToolResult;
use super::traits::{McpTool, ToolCapabilities};

/// Registry of every locally served tool.
///
/// ```
/// use food_planner::tools::registry::ToolRegistry;
///
/// let registry = ToolRegistry::with_builtin_tools();
/// assert!(registry.contains("fetch_local_recipe"));
/// assert!(!registry.contains("search_web"));
/// ```
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the recipe, safety, and shopping tools
    #[must_use]
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        for tool in create_recipe_tools()
            .into_iter()
            .chain(create_safety_tools())
            .chain(create_shopping_tools())
        {
            registry.register(Arc::from(tool));
        }
        info!("Registered {} built-in tools", registry.len());
        registry
    }

    /// Add a tool; the first registration of a name wins
    ///
    /// Returns `false` when the name was already taken.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> bool {
        let name = tool.name();
        if self.tools.contains_key(name) {
            warn!(tool = name, "duplicate tool registration ignored");
            return false;
        }
        debug!(
            tool = name,
            capabilities = %tool.capabilities().describe(),
            "registering tool"
        );
        self.tools.insert(name, tool);
        true
    }

    /// Whether `name` is served locally
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// True before any tool is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Names of tools carrying every flag in `required`
    #[must_use]
    pub fn filter_by_capabilities(&self, required: ToolCapabilities) -> Vec<&'static str> {
        self.tools
            .iter()
            .filter(|(_, tool)| tool.capabilities().contains(required))
            .map(|(name, _)| *name)
            .collect()
    }

    /// Schemas for `tools/list`, alphabetical
    #[must_use]
    pub fn all_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name(),
                description: tool.description(),
                input_schema: tool.input_schema(),
            })
            .collect()
    }

    /// Run the named tool and log the call outcome
    ///
    /// # Errors
    ///
    /// Returns `AppError` when no such tool is registered or the tool fails
    /// in a way its payload cannot express
    pub async fn execute(
        &self,
        name: &str,
        args: Value,
        context: &ToolExecutionContext,
    ) -> AppResult<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::unknown_tool(name))?;

        let started = Instant::now();
        let result = tool.execute(args, context).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let success = result.as_ref().is_ok_and(|r| !r.is_error);
        ToolLogger::log_tool_call(name, &context.request_id_str(), success, duration_ms);
        result
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tools.keys().collect::<Vec<_>>())
            .finish()
    }
}
