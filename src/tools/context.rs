// ABOUTME: Per-call handle on the shared planner resources plus a correlation id
// ABOUTME: Cloned cheaply; the resources behind the Arc are never mutated after startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::mcp::resources::PlannerResources;

/// What a tool sees while it runs
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Correlates the dispatch log line with any fallback signal the tool logs
    pub request_id: Uuid,
    /// Configuration and lookup tables
    pub resources: Arc<PlannerResources>,
}

impl ToolExecutionContext {
    /// Context with a fresh v4 request id
    #[must_use]
    pub fn new(resources: Arc<PlannerResources>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            resources,
        }
    }

    /// Request id rendered for log fields
    #[must_use]
    pub fn request_id_str(&self) -> String {
        self.request_id.to_string()
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("request_id", &self.request_id)
            .field("dataset_path", &self.resources.config.dataset_path)
            .finish_non_exhaustive()
    }
}
