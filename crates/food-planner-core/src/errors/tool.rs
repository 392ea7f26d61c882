// ABOUTME: Failures at the tool dispatch boundary, before or around a tool's own payload
// ABOUTME: Unknown tool names, malformed tools/call envelopes, and crashed worker tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dispatch errors.
//!
//! A tool never fails through this type for a pipeline reason; those become
//! sentinel payloads. `ToolError` covers the cases where no tool payload can
//! be produced at all.

use serde_json::{json, Value};
use thiserror::Error;

use super::{AppError, ErrorCode};

/// Why a tool call could not be dispatched or completed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No tool with this name is served locally
    #[error("no local tool named '{name}'")]
    UnknownTool {
        /// Requested tool name
        name: String,
    },
    /// The tools/call envelope was absent or did not decode
    #[error("malformed tools/call request: {reason}")]
    MalformedCall {
        /// Decoder message
        reason: String,
    },
    /// The blocking task backing a tool panicked or was cancelled
    #[error("worker for '{tool}' did not finish: {reason}")]
    WorkerFailed {
        /// Tool that spawned the task
        tool: String,
        /// Join error message
        reason: String,
    },
}

impl ToolError {
    /// Requested tool is not registered
    #[must_use]
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    /// Envelope could not be decoded
    #[must_use]
    pub fn malformed_call(reason: impl Into<String>) -> Self {
        Self::MalformedCall {
            reason: reason.into(),
        }
    }

    /// Background task ended abnormally
    #[must_use]
    pub fn worker_failed(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WorkerFailed {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownTool { .. } => ErrorCode::ResourceNotFound,
            Self::MalformedCall { .. } => ErrorCode::InvalidInput,
            Self::WorkerFailed { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<ToolError> for AppError {
    fn from(error: ToolError) -> Self {
        let details = match &error {
            ToolError::UnknownTool { name } => json!({ "tool": name }),
            ToolError::WorkerFailed { tool, .. } => json!({ "tool": tool }),
            ToolError::MalformedCall { .. } => Value::Null,
        };
        Self::new(error.error_code(), error.to_string()).with_details(details)
    }
}
