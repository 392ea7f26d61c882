// ABOUTME: Core types and constants for the food planner tool pipeline
// ABOUTME: Foundation crate with error handling, tool identifiers, and wire sentinels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Food Planner Core
//!
//! Foundation crate providing shared types and constants for the food planner
//! tool pipeline. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the dispatch-level `ToolError`
//! - **constants**: Tool identifiers, wire sentinels, and pipeline defaults

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;
