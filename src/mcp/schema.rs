// ABOUTME: MCP message bodies for initialize, tools/list, and tools/call
// ABOUTME: Tool argument schemas plus the call response built from a ToolResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP message bodies.
//!
//! Outgoing bodies only derive `Serialize` and the one incoming body,
//! [`ToolCall`], only derives `Deserialize`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::tools::ToolResult;

/// MCP protocol revision announced during `initialize`
pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

const INSTRUCTIONS: &str = "Recipe planning tools. Call `fetch_local_recipe` first; when it \
     answers NO_MATCH, fall back to `search_web`. Check ingredients with `check_cfia_recalls`, \
     scale with `modify_recipe`, then build the list with `prepare_shopping_list`.";

/// One entry of the `tools/list` result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    /// Tool name
    pub name: &'static str,
    /// Description shown to the model
    pub description: &'static str,
    /// Argument schema
    pub input_schema: JsonSchema,
}

/// Object schema describing a tool's arguments
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchema {
    #[serde(rename = "type")]
    schema_type: &'static str,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<&'static str, PropertySchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    required: Vec<&'static str>,
}

impl JsonSchema {
    /// Object schema from `(name, property)` pairs and required names
    #[must_use]
    pub fn object(
        properties: Vec<(&'static str, PropertySchema)>,
        required: &[&'static str],
    ) -> Self {
        Self {
            schema_type: "object",
            properties: properties.into_iter().collect(),
            required: required.to_vec(),
        }
    }
}

/// Schema of a single argument
#[derive(Debug, Clone, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    property_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<PropertySchema>>,
}

impl PropertySchema {
    /// Argument of a scalar or object type
    #[must_use]
    pub const fn new(property_type: &'static str, description: &'static str) -> Self {
        Self {
            property_type,
            description: Some(description),
            items: None,
        }
    }

    /// Array of strings
    #[must_use]
    pub fn string_array(description: &'static str) -> Self {
        Self {
            property_type: "array",
            description: Some(description),
            items: Some(Box::new(Self {
                property_type: "string",
                description: None,
                items: None,
            })),
        }
    }
}

/// `tools/call` params
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    /// Tool name
    pub name: String,
    /// Tool arguments; absent means `{}`
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// `tools/call` result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResponse {
    /// Text rendering of the payload
    pub content: Vec<Content>,
    /// Whether the payload encodes a failure
    pub is_error: bool,
    /// The payload as JSON
    pub structured_content: Value,
}

impl From<ToolResult> for ToolResponse {
    fn from(result: ToolResult) -> Self {
        Self {
            content: vec![Content::Text {
                text: result.to_text(),
            }],
            is_error: result.is_error,
            structured_content: result.content,
        }
    }
}

/// Content block of a tool response
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
}

/// `initialize` result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResponse {
    protocol_version: &'static str,
    server_info: ServerInfo,
    capabilities: Value,
    instructions: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct ServerInfo {
    name: &'static str,
    version: &'static str,
}

impl InitializeResponse {
    /// Handshake body for a server with a fixed tool list
    #[must_use]
    pub fn new(server_name: &'static str, server_version: &'static str) -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: json!({ "tools": { "listChanged": false } }),
            instructions: INSTRUCTIONS,
        }
    }
}
