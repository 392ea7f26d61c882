// ABOUTME: Serving-size scaler that rescales leading ingredient quantities
// ABOUTME: Appends one deterministic Health Canada adaptation note per ingredient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Quantity Scaler
//!
//! `scale_factor = target / max(original, 1)`. Each ingredient line has any
//! earlier adaptation note removed, its leading quantity multiplied and
//! rounded to two decimals, and then at most one note appended:
//!
//! - contains `salt` → sodium reduction note
//! - else contains `butter` or `lard` → fat substitution note
//!
//! Stripping before annotating keeps repeated scaling from stacking notes.

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::models::RecipeRecord;
use super::text::{format_scaled_quantity, parse_leading_quantity};
use crate::config::tables::RecipeTables;
use crate::errors::PlannerError;

/// A recipe after scaling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    /// Updated record with the target serving count
    #[serde(flatten)]
    pub recipe: RecipeRecord,
    /// Ratio applied to every quantity
    pub scale_factor: f64,
    /// Health goal supplied by the caller, echoed back
    pub health_goal: Option<String>,
}

/// Split trailing `[note]` suffixes matching any of `notes` off a line.
///
/// Returns the bare line and the notes found, in the order they appeared.
#[must_use]
pub fn split_adaptation_notes<'l>(line: &'l str, notes: &[&str]) -> (&'l str, Vec<String>) {
    let mut current = line.trim_end();
    let mut found = Vec::new();
    loop {
        let stripped = notes.iter().find_map(|note| {
            current
                .strip_suffix(']')
                .and_then(|rest| rest.strip_suffix(*note))
                .and_then(|rest| rest.strip_suffix('['))
                .map(|rest| (rest, *note))
        });
        match stripped {
            Some((rest, note)) => {
                found.push(note.to_owned());
                current = rest.trim_end();
            }
            None => {
                found.reverse();
                return (current, found);
            }
        }
    }
}

/// Remove trailing `[note]` suffixes matching any of `notes`
#[must_use]
pub fn strip_adaptation_notes<'l>(line: &'l str, notes: &[&str]) -> &'l str {
    split_adaptation_notes(line, notes).0
}

/// Read a serving count argument.
///
/// # Errors
///
/// Returns [`PlannerError::MalformedInput`] unless the value is a positive
/// whole number (or a string holding one).
pub fn parse_target_servings(value: Option<&Value>) -> Result<i64, PlannerError> {
    let servings = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && v.fract() == 0.0)
                .map(|v| v as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match servings {
        Some(servings) if servings > 0 => Ok(servings),
        Some(servings) => Err(PlannerError::malformed(format!(
            "target_servings must be positive, got {servings}"
        ))),
        None => Err(PlannerError::malformed(
            "target_servings must be a positive whole number",
        )),
    }
}

/// Rescales recipes using the adaptation notes from the lookup tables
#[derive(Debug, Clone, Copy)]
pub struct RecipeScaler<'a> {
    tables: &'a RecipeTables,
}

impl<'a> RecipeScaler<'a> {
    /// Scaler over the given tables
    #[must_use]
    pub const fn new(tables: &'a RecipeTables) -> Self {
        Self { tables }
    }

    /// Scale a recipe to `target_servings`.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::MalformedInput`] for a non-positive target.
    pub fn scale(
        &self,
        mut record: RecipeRecord,
        target_servings: i64,
        health_goal: Option<&str>,
    ) -> Result<ScaledRecipe, PlannerError> {
        if target_servings <= 0 {
            return Err(PlannerError::malformed(format!(
                "target_servings must be positive, got {target_servings}"
            )));
        }

        let original_servings = record.servings;
        let scale_factor = target_servings as f64 / record.effective_servings() as f64;

        record.ingredients = record
            .ingredients
            .iter()
            .map(|line| self.annotate(&self.scale_line(line, scale_factor)))
            .collect();
        record.servings = target_servings;

        let health_goal = health_goal
            .map(str::trim)
            .filter(|goal| !goal.is_empty())
            .map(str::to_owned);

        info!(
            recipe = %record.name,
            original_servings,
            target_servings,
            scale_factor,
            health_goal = health_goal.as_deref().unwrap_or("none"),
            "Scaled recipe"
        );

        Ok(ScaledRecipe {
            recipe: record,
            scale_factor,
            health_goal,
        })
    }

    /// Multiply the leading quantity of a line, leaving the rest untouched.
    ///
    /// Earlier adaptation notes are removed first. Lines without a leading
    /// quantity come back unchanged apart from that.
    #[must_use]
    pub fn scale_line(&self, line: &str, scale_factor: f64) -> String {
        let stripped = strip_adaptation_notes(line, &self.tables.adaptation_notes());
        parse_leading_quantity(stripped).map_or_else(
            || stripped.to_owned(),
            |token| {
                format!(
                    "{}{}{}",
                    &stripped[..token.start],
                    format_scaled_quantity(token.value * scale_factor),
                    &stripped[token.end..]
                )
            },
        )
    }

    /// Append the single highest-priority note that applies to a line
    #[must_use]
    pub fn annotate(&self, line: &str) -> String {
        let lowered = line.to_lowercase();
        let note = if lowered.contains("salt") {
            Some(&self.tables.sodium_note)
        } else if lowered.contains("butter") || lowered.contains("lard") {
            Some(&self.tables.fat_note)
        } else {
            None
        };

        note.map_or_else(|| line.to_owned(), |note| format!("{line} [{note}]"))
    }
}
