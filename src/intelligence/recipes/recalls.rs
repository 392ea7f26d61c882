// ABOUTME: Recall safety checker flagging ingredients that match recalled food keywords
// ABOUTME: Renders PASS / FAIL / ERROR payloads and loads keyword files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use food_planner_core::constants::sentinels::{ERROR_PREFIX, RECALL_FAIL_PREFIX, RECALL_PASS};

use crate::errors::PlannerError;

/// Outcome of a recall check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallStatus {
    /// No ingredient matched a recall keyword
    Pass,
    /// Matched ingredient names, in input order
    Fail(Vec<String>),
    /// Input could not be checked
    Error(String),
}

impl RecallStatus {
    /// Wire form: `PASS`, `FAIL: ['a', 'b']`, or `ERROR: <reason>`
    #[must_use]
    pub fn to_payload(&self) -> String {
        match self {
            Self::Pass => RECALL_PASS.to_owned(),
            Self::Fail(matched) => {
                let items: Vec<String> = matched.iter().map(|name| quote_item(name)).collect();
                format!("{RECALL_FAIL_PREFIX}: [{}]", items.join(", "))
            }
            Self::Error(reason) => format!("{ERROR_PREFIX}: {reason}"),
        }
    }

    /// Whether the check passed
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Single-quote a list item, switching to double quotes when it contains a
/// single quote and no double quote.
fn quote_item(item: &str) -> String {
    if item.contains('\'') && !item.contains('"') {
        format!("\"{item}\"")
    } else {
        format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// Matches ingredient names against recall keywords
#[derive(Debug, Clone, Copy)]
pub struct RecallChecker<'a> {
    keywords: &'a [String],
}

impl<'a> RecallChecker<'a> {
    /// Checker over lowercase keywords
    #[must_use]
    pub const fn new(keywords: &'a [String]) -> Self {
        Self { keywords }
    }

    /// Check names case-insensitively against every keyword
    #[must_use]
    pub fn check<S: AsRef<str>>(&self, ingredient_names: &[S]) -> RecallStatus {
        let matched: Vec<String> = ingredient_names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| {
                let lowered = name.to_lowercase();
                self.keywords
                    .iter()
                    .filter(|keyword| !keyword.is_empty())
                    .any(|keyword| lowered.contains(keyword.to_lowercase().as_str()))
            })
            .map(str::to_owned)
            .collect();

        if matched.is_empty() {
            RecallStatus::Pass
        } else {
            info!(matched = ?matched, "Ingredients match active recalls");
            RecallStatus::Fail(matched)
        }
    }

    /// Check a tool argument that should be a list of strings.
    ///
    /// A JSON-encoded list inside a string is accepted. Anything else yields
    /// [`RecallStatus::Error`].
    #[must_use]
    pub fn check_value(&self, value: &Value) -> RecallStatus {
        let decoded;
        let value = match value {
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(inner @ Value::Array(_)) => {
                    decoded = inner;
                    &decoded
                }
                _ => value,
            },
            other => other,
        };

        let Value::Array(items) = value else {
            return RecallStatus::Error(format!(
                "ingredient_list must be a list of strings, found {value}"
            ));
        };

        let mut names = Vec::with_capacity(items.len());
        for item in items {
            match item.as_str() {
                Some(name) => names.push(name),
                None => {
                    return RecallStatus::Error(format!(
                        "ingredient_list entries must be strings, found {item}"
                    ));
                }
            }
        }

        self.check(&names)
    }
}

/// Read recall keywords from a file: one per line, blank lines and `#`
/// comments ignored, entries lowercased.
///
/// # Errors
///
/// Returns [`PlannerError::DataUnavailable`] when the file cannot be read.
pub fn load_recall_keywords(path: &Path) -> Result<Vec<String>, PlannerError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Failed to read recall keyword file");
        PlannerError::data_unavailable(path.display().to_string(), e.to_string())
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}
