// ABOUTME: Tool layer exposing the recipe pipeline as MCP tools.
// ABOUTME: Trait, registry, execution context, result type, and implementations.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Each pipeline stage is exposed as a named tool with a JSON argument
//! schema. Tools answer with sentinel payloads (`NO_MATCH`, `PASS`,
//! `FAIL: [...]`, `ERROR: ...`) that the orchestrator branches on.

/// Per-call execution context
pub mod context;
/// Tool implementations by category
pub mod implementations;
/// Tool registry and dispatch
pub mod registry;
/// Tool result type
pub mod result;
/// `McpTool` trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use traits::{McpTool, ToolCapabilities};
