// ABOUTME: Text sentinels returned across the tool-call boundary
// ABOUTME: The orchestrator matches these prefixes to decide on fallbacks and retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Prefix of every "no local recipe" payload
pub const NO_MATCH_PREFIX: &str = "NO_MATCH";

/// Recall check found nothing
pub const RECALL_PASS: &str = "PASS";

/// Prefix of a recall check that matched one or more ingredients
pub const RECALL_FAIL_PREFIX: &str = "FAIL";

/// Prefix of a generic tool failure
pub const ERROR_PREFIX: &str = "ERROR";

/// Prefix of a scaling failure
pub const MODIFY_RECIPE_ERROR_PREFIX: &str = "ERROR in modify_recipe";

/// Placeholder quantity for ingredients listed without an amount
pub const TO_TASTE: &str = "to taste";

/// Value of the `source` field on locally selected recipes
pub const LOCAL_SOURCE: &str = "local";
