// ABOUTME: JSON-RPC 2.0 envelope types for the newline-delimited stdio transport
// ABOUTME: Requests, single-outcome responses, and AppError to error object mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # JSON-RPC 2.0 envelopes
//!
//! A response carries exactly one outcome. The [`Outcome`] enum is flattened
//! into the response object so it serializes as either a `result` or an
//! `error` member, never both.
//!
//! ```rust
//! use food_planner::jsonrpc::JsonRpcResponse;
//! # use serde_json::json;
//!
//! let response = JsonRpcResponse::success(Some(json!(1)), json!({"tools": []}));
//! assert!(response.is_success());
//! assert_eq!(
//!     serde_json::to_value(&response).unwrap(),
//!     json!({"jsonrpc": "2.0", "result": {"tools": []}, "id": 1})
//! );
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Protocol version every envelope carries
pub const JSONRPC_VERSION: &str = "2.0";

/// Incoming request or notification
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Version tag; checked by the router, defaulted so a missing tag is reportable
    #[serde(default)]
    pub jsonrpc: String,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Option<Value>,
    /// Correlation id; absent for notifications
    #[serde(default)]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications get no response line
    #[must_use]
    pub const fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Result or error member of a response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Method output
    Result(Value),
    /// Failure description
    Error(JsonRpcError),
}

/// Outgoing response line
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// Always [`JSONRPC_VERSION`]
    pub jsonrpc: &'static str,
    /// Exactly one of `result` or `error`
    #[serde(flatten)]
    pub outcome: Outcome,
    /// Echo of the request id; null when the request could not be read
    pub id: Option<Value>,
}

/// Error member of a response
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    /// Numeric code, see [`error_codes`]
    pub code: i32,
    /// Short description
    pub message: String,
    /// Structured context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Successful response
    #[must_use]
    pub const fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            outcome: Outcome::Result(result),
            id,
        }
    }

    /// Error response with a protocol-level code
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self::failure(
            id,
            JsonRpcError {
                code,
                message: message.into(),
                data: None,
            },
        )
    }

    /// Error response for an application failure; details travel as `data`
    #[must_use]
    pub fn from_app_error(id: Option<Value>, error: &AppError) -> Self {
        Self::failure(
            id,
            JsonRpcError {
                code: error.code.jsonrpc_code(),
                message: error.message.clone(),
                data: (!error.details.is_null()).then(|| error.details.clone()),
            },
        )
    }

    const fn failure(id: Option<Value>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            outcome: Outcome::Error(error),
            id,
        }
    }

    /// Whether the outcome is a result
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Result(_))
    }

    /// Code of the error outcome
    #[must_use]
    pub const fn error_code(&self) -> Option<i32> {
        match &self.outcome {
            Outcome::Error(error) => Some(error.code),
            Outcome::Result(_) => None,
        }
    }
}

/// Codes reserved by JSON-RPC 2.0
pub mod error_codes {
    /// Line was not valid JSON
    pub const PARSE_ERROR: i32 = -32700;
    /// JSON was not a request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method is not served
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Params were rejected
    pub const INVALID_PARAMS: i32 = -32602;
    /// Server-side failure
    pub const INTERNAL_ERROR: i32 = -32603;
}
