// ABOUTME: Model Context Protocol (MCP) surface for agent runtimes
// ABOUTME: Schemas, shared resources, and the stdio JSON-RPC server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Shared planner resources
pub mod resources;
/// Request routing and stdio transport
pub mod server;
/// MCP message schemas
pub mod schema;

pub use resources::PlannerResources;
pub use server::McpServer;
