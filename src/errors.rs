// ABOUTME: Error types for the recipe pipeline and re-exports of the unified error system
// ABOUTME: PlannerError classifies data, filtering, and input failures for tool payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Two layers:
//!
//! - [`AppError`] / [`ErrorCode`] from `food-planner-core` for the transport
//!   and registry (JSON-RPC error objects).
//! - [`PlannerError`] for the pipeline itself. Tools never propagate it as a
//!   protocol error; they render it into the sentinel payloads the
//!   orchestrator branches on (`NO_MATCH`, `ERROR`, `{"error": ...}`).

use thiserror::Error;

pub use food_planner_core::errors::{AppError, AppResult, ErrorCode, ToolError};

/// Failure of a pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The reference dataset could not be opened or decoded
    #[error("recipe dataset unavailable at {path}: {reason}")]
    DataUnavailable {
        /// Configured dataset path
        path: String,
        /// Underlying failure
        reason: String,
    },

    /// Every record was eliminated by the filters
    #[error("no recipes satisfy the requested constraints")]
    NoCandidates,

    /// A tool argument could not be interpreted
    #[error("{0}")]
    MalformedInput(String),
}

impl PlannerError {
    /// Dataset failure for a path
    #[must_use]
    pub fn data_unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Malformed input with a human-readable reason
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput(reason.into())
    }
}

impl From<PlannerError> for AppError {
    fn from(error: PlannerError) -> Self {
        match &error {
            PlannerError::DataUnavailable { path, .. } => {
                Self::new(ErrorCode::ResourceUnavailable, error.to_string())
                    .with_details(serde_json::json!({ "path": path }))
            }
            PlannerError::NoCandidates => {
                Self::new(ErrorCode::ResourceNotFound, error.to_string())
            }
            PlannerError::MalformedInput(reason) => Self::invalid_input(reason.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planner_error_maps_to_app_error_codes() {
        let unavailable: AppError = PlannerError::data_unavailable("x.csv", "missing").into();
        assert_eq!(unavailable.code, ErrorCode::ResourceUnavailable);

        let empty: AppError = PlannerError::NoCandidates.into();
        assert_eq!(empty.code, ErrorCode::ResourceNotFound);

        let malformed: AppError = PlannerError::malformed("bad servings").into();
        assert_eq!(malformed.code, ErrorCode::InvalidInput);
        assert!(malformed.message.contains("bad servings"));
    }
}
