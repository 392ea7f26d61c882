// ABOUTME: MCP request routing and the newline-delimited JSON-RPC stdio transport
// ABOUTME: Validates, routes, and executes initialize, ping, tools/list, and tools/call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Server
//!
//! One JSON-RPC message per line on stdin, one response per line on
//! stdout. Logs go to stderr so they never interleave with responses.
//! Notifications (requests without an id) are processed but not answered.

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tokio::io::{
    stdin, stdout, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader,
};
use tracing::{debug, error, info, warn};

use food_planner_core::constants::service::FOOD_PLANNER;

use crate::errors::{AppResult, ToolError};
use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::tools::{ToolExecutionContext, ToolRegistry};

use super::resources::PlannerResources;
use super::schema::{InitializeResponse, ToolCall, ToolResponse};

/// Routes MCP requests to the tool registry
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    resources: Arc<PlannerResources>,
}

impl McpServer {
    /// Create a server over a populated registry
    #[must_use]
    pub const fn new(registry: Arc<ToolRegistry>, resources: Arc<PlannerResources>) -> Self {
        Self {
            registry,
            resources,
        }
    }

    /// Server with every built-in tool registered
    #[must_use]
    pub fn with_builtin_tools(resources: PlannerResources) -> Self {
        Self::new(
            Arc::new(ToolRegistry::with_builtin_tools()),
            Arc::new(resources),
        )
    }

    /// Registry backing this server
    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resources handed to each tool call
    #[must_use]
    pub const fn resources(&self) -> &Arc<PlannerResources> {
        &self.resources
    }

    /// Handle one raw line of input.
    ///
    /// Returns `None` for blank lines and notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid JSON-RPC message: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Invalid request: {e}"),
            )),
        }
    }

    /// Handle a decoded request and return a response unless it is a notification
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        debug!(mcp_method = %request.method, mcp_id = ?request.id, "MCP request");

        if request.is_notification() {
            debug!("Notification received: {}", request.method);
            return None;
        }

        let id = request.id.clone();
        let response = match self.process_request(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to process MCP request: {}", e);
                JsonRpcResponse::from_app_error(id, &e)
            }
        };

        debug!(
            duration_ms = start_time.elapsed().as_millis(),
            success = response.is_success(),
            "MCP request completed"
        );
        Some(response)
    }

    async fn process_request(&self, request: JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Ok(JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                format!(
                    "Invalid JSON-RPC version: got '{}', expected '{JSONRPC_VERSION}'",
                    request.jsonrpc
                ),
            ));
        }

        match request.method.as_str() {
            "initialize" => Self::handle_initialize(request.id),
            "ping" => Ok(JsonRpcResponse::success(request.id, json!({}))),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request).await,
            method => {
                warn!("Unknown MCP method: {}", method);
                Ok(JsonRpcResponse::error(
                    request.id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Unknown method: {method}"),
                ))
            }
        }
    }

    fn handle_initialize(id: Option<Value>) -> AppResult<JsonRpcResponse> {
        let response = InitializeResponse::new(FOOD_PLANNER, env!("CARGO_PKG_VERSION"));
        Ok(JsonRpcResponse::success(id, serde_json::to_value(response)?))
    }

    fn handle_tools_list(&self, id: Option<Value>) -> AppResult<JsonRpcResponse> {
        let tools = serde_json::to_value(self.registry.all_schemas())?;
        Ok(JsonRpcResponse::success(id, json!({ "tools": tools })))
    }

    async fn handle_tools_call(&self, request: JsonRpcRequest) -> AppResult<JsonRpcResponse> {
        let params = request
            .params
            .ok_or_else(|| ToolError::malformed_call("params are required"))?;
        let call: ToolCall =
            serde_json::from_value(params).map_err(|e| ToolError::malformed_call(e.to_string()))?;

        let context = ToolExecutionContext::new(Arc::clone(&self.resources));
        debug!(
            tool = %call.name,
            request_id = %context.request_id,
            rpc_id = ?request.id,
            "dispatching tool call"
        );
        let args = call.arguments.unwrap_or_else(|| json!({}));
        let result = self.registry.execute(&call.name, args, &context).await?;

        let response = ToolResponse::from(result);
        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(response)?,
        ))
    }

    /// Serve newline-delimited JSON-RPC until the reader closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing a response fails
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> AppResult<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(reader).lines();

        while let Some(line) = lines.next_line().await? {
            if let Some(response) = self.handle_line(&line).await {
                let mut encoded = serde_json::to_string(&response)?;
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    /// Run the stdio transport
    ///
    /// # Errors
    ///
    /// Returns an error if stdio processing fails
    pub async fn run_stdio(&self) -> AppResult<()> {
        info!(
            tools = self.registry.len(),
            dataset = %self.resources.config.dataset_path.display(),
            "MCP stdio transport ready - listening on stdin/stdout"
        );
        self.serve(stdin(), stdout()).await?;
        info!("stdin closed, shutting down");
        Ok(())
    }
}
