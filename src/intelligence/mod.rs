// ABOUTME: Intelligence module hosting the deterministic recipe pipeline
// ABOUTME: Re-exports the recipes submodule used by the planner tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Recipe selection, safety checks, scaling, and shopping list generation.

/// Recipe pipeline stages
pub mod recipes;
