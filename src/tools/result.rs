// ABOUTME: Payload a tool hands back to the dispatcher, with its failure flag
// ABOUTME: Sentinel strings travel as JSON strings; recipes and lists as JSON values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tool payloads.
//!
//! A pipeline stage that cannot produce its normal output still returns a
//! `ToolResult`: the sentinel goes in `content` and `is_error` tells the
//! MCP client which branch it is on.

use serde::Serialize;
use serde_json::Value;

/// Payload of one tool call
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    /// JSON payload
    pub content: Value,
    /// Set for `ERROR:` sentinels and error objects
    pub is_error: bool,
}

impl ToolResult {
    /// Normal payload
    #[must_use]
    pub const fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// Failure payload
    #[must_use]
    pub const fn error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }

    /// Serialize a typed payload
    ///
    /// # Errors
    ///
    /// Propagates the `serde_json` error when `value` cannot be represented as JSON
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::ok)
    }

    /// Sentinel that is not a failure (`NO_MATCH`, `PASS`, `FAIL: [...]`)
    #[must_use]
    pub fn text(sentinel: impl Into<String>) -> Self {
        Self::ok(Value::String(sentinel.into()))
    }

    /// `ERROR:` sentinel
    #[must_use]
    pub fn error_text(sentinel: impl Into<String>) -> Self {
        Self::error(Value::String(sentinel.into()))
    }

    /// Sentinel text, when the payload is one
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.content.as_str()
    }

    /// Text block for the MCP response; sentinels verbatim, objects as compact JSON
    #[must_use]
    pub fn to_text(&self) -> String {
        self.as_text().map_or_else(|| self.content.to_string(), str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinels_render_without_quotes() {
        let no_match = ToolResult::text("NO_MATCH: dataset empty");
        assert_eq!(no_match.to_text(), "NO_MATCH: dataset empty");
        assert!(ToolResult::error_text("ERROR: bad input").is_error);
    }

    #[test]
    fn test_objects_render_as_json() {
        let result = ToolResult::ok(json!({"servings": 4}));
        assert_eq!(result.to_text(), r#"{"servings":4}"#);
        assert_eq!(result.as_text(), None);
    }
}
