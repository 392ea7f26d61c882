// ABOUTME: Main library entry point for the food planner tool pipeline
// ABOUTME: Deterministic recipe tools exposed to an agent runtime over MCP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy.
#![deny(unsafe_code)]

//! # Food Planner
//!
//! The deterministic half of a conversational meal planner. An agent runtime
//! owns the conversation; this crate owns the tools it calls:
//!
//! - **`fetch_local_recipe`**: best-rated dataset recipe within time, diet,
//!   type, and nutrient limits, or a `NO_MATCH` sentinel
//! - **`check_cfia_recalls`**: `PASS` / `FAIL: [...]` against recall keywords
//! - **`modify_recipe`**: serving-size scaling with Health Canada notes
//! - **`prepare_shopping_list`**: store-ready list grouped by section
//! - **`get_local_recipe_type`**: recipe types present in the dataset
//!
//! ## Architecture
//!
//! - **intelligence::recipes**: the pure pipeline stages
//! - **dataset**: CSV loading into typed records
//! - **config**: environment settings and rule tables
//! - **tools**: `McpTool` implementations and the registry
//! - **mcp** / **jsonrpc**: newline-delimited JSON-RPC over stdio
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use food_planner::config::PlannerConfig;
//! use food_planner::errors::AppResult;
//! use food_planner::mcp::{McpServer, PlannerResources};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let resources = PlannerResources::from_config(PlannerConfig::from_env());
//!     McpServer::with_builtin_tools(resources).run_stdio().await
//! }
//! ```

/// Environment configuration and rule tables
pub mod config;

/// Recipe dataset loading
pub mod dataset;

/// Pipeline and transport error types
pub mod errors;

/// Recipe pipeline stages
pub mod intelligence;

/// JSON-RPC 2.0 message types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP server, schemas, and shared resources
pub mod mcp;

/// Tool trait, registry, and implementations
pub mod tools;
