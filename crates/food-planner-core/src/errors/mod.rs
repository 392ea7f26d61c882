// ABOUTME: AppError, the error every protocol-facing layer returns, and its ErrorCode
// ABOUTME: Codes carry their JSON-RPC mapping so the transport never guesses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Errors that reach the transport
//!
//! Pipeline failures are rendered into tool payloads and never become an
//! [`AppError`]. What does become one is reported to the client as a JSON-RPC
//! error object, so each [`ErrorCode`] knows its JSON-RPC code.

/// Tool dispatch errors
pub mod tool;

pub use tool::ToolError;

use std::error::Error as StdError;
use std::fmt;
use std::io;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Application error classes, grouped by the hundreds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Argument or envelope failed validation
    InvalidInput = 3000,
    /// Named tool or record does not exist
    ResourceNotFound = 4000,
    /// Dataset or recall file cannot be read right now
    ResourceUnavailable = 4003,
    /// Unexpected failure inside the server
    InternalError = 9000,
    /// File I/O failed
    StorageError = 9002,
    /// JSON encoding or decoding failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// JSON-RPC code reported for this class
    #[must_use]
    pub const fn jsonrpc_code(self) -> i32 {
        match self {
            Self::InvalidInput | Self::ResourceNotFound => -32602,
            Self::ResourceUnavailable
            | Self::InternalError
            | Self::StorageError
            | Self::SerializationError => -32603,
        }
    }

    /// Prefix used by `Display`
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceUnavailable => "The resource is temporarily unavailable",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Error returned across the registry and transport boundary
#[derive(Debug, Error)]
pub struct AppError {
    /// Error class
    pub code: ErrorCode,
    /// Message sent to the client
    pub message: String,
    /// Sent as JSON-RPC `data` unless null
    pub details: Value,
    /// Underlying cause, kept for logs
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Error with no details or cause
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// [`ErrorCode::InvalidInput`]
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// [`ErrorCode::ResourceUnavailable`]
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ResourceUnavailable, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::StorageError, error.to_string()).with_source(error)
    }
}

/// Result alias for [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_jsonrpc_mapping() {
        assert_eq!(ErrorCode::InvalidInput.jsonrpc_code(), -32602);
        assert_eq!(ErrorCode::ResourceNotFound.jsonrpc_code(), -32602);
        assert_eq!(ErrorCode::ResourceUnavailable.jsonrpc_code(), -32603);
        assert_eq!(ErrorCode::InternalError.jsonrpc_code(), -32603);
    }

    #[test]
    fn test_app_error_display_includes_description() {
        let error = AppError::invalid_input("target_servings must be positive");
        assert_eq!(
            error.to_string(),
            "The provided input is invalid: target_servings must be positive"
        );
    }

    #[test]
    fn test_codes_serialize_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::ResourceUnavailable).unwrap();
        assert_eq!(json, "\"RESOURCE_UNAVAILABLE\"");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let error = AppError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(error.code, ErrorCode::StorageError);
        assert!(error.source.is_some());
        let unavailable = AppError::unavailable("dataset missing");
        assert!(unavailable.details.is_null());
    }
}
