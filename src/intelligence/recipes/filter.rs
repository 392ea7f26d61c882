// ABOUTME: Multi-stage constraint filter selecting the best local recipe
// ABOUTME: Narrows by diet, time, recipe type, nutrient limits, and rating floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constraint Filter
//!
//! Records are normalized once on entry and then pass five narrowing stages:
//!
//! 1. **Diet**: drop records whose ingredient text contains any exclusion
//!    keyword of any requested restriction.
//! 2. **Time**: keep records whose total time is within the ceiling.
//! 3. **Type**: keep records whose cuisine path contains the requested type.
//! 4. **Nutrients**: compare each constrained nutrient against its limit in
//!    the configured direction.
//! 5. **Rating**: keep records rated at least the configured minimum.
//!
//! The highest-rated survivor wins; ties go to the earliest record.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use food_planner_core::constants::sentinels::NO_MATCH_PREFIX;
use food_planner_core::constants::tools::SEARCH_WEB;

use super::models::{NutrientKey, QueryParams, RecipeRecord};
use super::text::{nutrient_value, parse_time_field};
use crate::config::tables::RecipeTables;
use crate::errors::PlannerError;

/// Survivor counts after each stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterTrace {
    /// Records read from the dataset
    pub loaded: usize,
    /// After diet exclusion
    pub after_diet: usize,
    /// After the time ceiling
    pub after_time: usize,
    /// After the recipe type match
    pub after_type: usize,
    /// After nutrient limits
    pub after_nutrients: usize,
    /// After the rating floor
    pub after_rating: usize,
}

impl FilterTrace {
    /// Stage names with their counts, in pipeline order
    #[must_use]
    pub const fn stages(&self) -> [(&'static str, usize); 6] {
        [
            ("loaded", self.loaded),
            ("diet", self.after_diet),
            ("time", self.after_time),
            ("type", self.after_type),
            ("nutrients", self.after_nutrients),
            ("rating", self.after_rating),
        ]
    }

    /// Whether no stage increased the count
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        self.stages().windows(2).all(|pair| pair[1].1 <= pair[0].1)
    }
}

/// Result of a filter run
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Index of the selected record in the input slice
    pub selected: Option<usize>,
    /// Per-stage counts
    pub trace: FilterTrace,
}

/// Record fields the stages compare, computed once
struct Candidate {
    index: usize,
    total_minutes: u32,
    rating: f64,
    ingredient_text: String,
    cuisine_path: String,
    nutrients: BTreeMap<NutrientKey, f64>,
}

impl Candidate {
    fn normalize(index: usize, record: &RecipeRecord, params: &QueryParams) -> Self {
        let nutrients = params
            .constraints
            .iter()
            .map(|(key, _)| (key, nutrient_value(record.nutrition.as_ref(), key)))
            .collect();
        Self {
            index,
            total_minutes: parse_time_field(record.total_time.as_ref()),
            rating: if record.rating.is_finite() { record.rating } else { 0.0 },
            ingredient_text: record.ingredient_text(),
            cuisine_path: record.cuisine_path.to_lowercase(),
            nutrients,
        }
    }
}

/// Constraint filter over a recipe collection
#[derive(Debug, Clone, Copy)]
pub struct RecipeFilter<'a> {
    tables: &'a RecipeTables,
    min_rating: f64,
}

impl<'a> RecipeFilter<'a> {
    /// Filter using the given tables and rating floor
    #[must_use]
    pub const fn new(tables: &'a RecipeTables, min_rating: f64) -> Self {
        Self { tables, min_rating }
    }

    /// Run every stage and report the winning index with the trace
    #[must_use]
    pub fn run(&self, records: &[RecipeRecord], params: &QueryParams) -> FilterOutcome {
        let mut trace = FilterTrace {
            loaded: records.len(),
            ..FilterTrace::default()
        };

        let mut candidates: Vec<Candidate> = records
            .iter()
            .enumerate()
            .map(|(index, record)| Candidate::normalize(index, record, params))
            .collect();

        for restriction in &params.dietary_restrictions {
            let keywords = self.tables.diet_keywords(*restriction);
            candidates.retain(|c| {
                !keywords
                    .iter()
                    .any(|keyword| c.ingredient_text.contains(keyword.as_str()))
            });
        }
        trace.after_diet = candidates.len();

        candidates.retain(|c| c.total_minutes <= params.max_total_time);
        trace.after_time = candidates.len();

        if let Some(recipe_type) = params
            .recipe_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
        {
            let needle = recipe_type.to_lowercase();
            candidates.retain(|c| c.cuisine_path.contains(&needle));
        }
        trace.after_type = candidates.len();

        for (key, limit) in params.constraints.iter() {
            let direction = self.tables.direction(key);
            candidates.retain(|c| {
                let value = c.nutrients.get(&key).copied().unwrap_or(0.0);
                direction.admits(value, limit)
            });
        }
        trace.after_nutrients = candidates.len();

        candidates.retain(|c| c.rating >= self.min_rating);
        trace.after_rating = candidates.len();

        let mut best: Option<&Candidate> = None;
        for candidate in &candidates {
            if best.is_none_or(|b| candidate.rating > b.rating) {
                best = Some(candidate);
            }
        }

        debug!(
            loaded = trace.loaded,
            after_diet = trace.after_diet,
            after_time = trace.after_time,
            after_type = trace.after_type,
            after_nutrients = trace.after_nutrients,
            after_rating = trace.after_rating,
            "Recipe filter trace"
        );

        FilterOutcome {
            selected: best.map(|c| c.index),
            trace,
        }
    }

    /// Select the best record, consuming the collection.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::NoCandidates`] when no record survives.
    pub fn select_best(
        &self,
        records: Vec<RecipeRecord>,
        params: &QueryParams,
    ) -> Result<(RecipeRecord, FilterTrace), PlannerError> {
        let outcome = self.run(&records, params);
        let index = outcome.selected.ok_or(PlannerError::NoCandidates)?;
        let record = records
            .into_iter()
            .nth(index)
            .ok_or(PlannerError::NoCandidates)?;

        info!(
            recipe = %record.name,
            rating = record.rating,
            candidates = outcome.trace.after_rating,
            "Selected local recipe"
        );

        Ok((record, outcome.trace))
    }
}

/// Render a selection failure as the `NO_MATCH` payload.
///
/// The wording tells the caller whether the dataset was missing or the
/// filters were too strict, and always points at the web search fallback.
#[must_use]
pub fn no_match_message(error: &PlannerError) -> String {
    match error {
        PlannerError::DataUnavailable { reason, .. } => format!(
            "{NO_MATCH_PREFIX}: Local recipe dataset is unavailable ({reason}). \
             Use {SEARCH_WEB} to find a recipe online."
        ),
        PlannerError::NoCandidates => format!(
            "{NO_MATCH_PREFIX}: No local recipes meet these criteria (filters too strict). \
             Use {SEARCH_WEB} to find a recipe online."
        ),
        PlannerError::MalformedInput(reason) => format!(
            "{NO_MATCH_PREFIX}: Query could not be applied ({reason}). \
             Use {SEARCH_WEB} to find a recipe online."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::recipes::models::{DietaryRestriction, TimeField};

    fn record(name: &str, minutes: i64, rating: f64, ingredients: &[&str]) -> RecipeRecord {
        let mut record = RecipeRecord::new(name, 2);
        record.total_time = Some(TimeField::Minutes(minutes));
        record.rating = rating;
        record.ingredients = ingredients.iter().map(|s| (*s).to_owned()).collect();
        record
    }

    #[test]
    fn test_ties_go_to_first_record() {
        let tables = RecipeTables::default();
        let records = vec![
            record("First", 10, 4.5, &["rice"]),
            record("Second", 10, 4.5, &["beans"]),
        ];
        let outcome = RecipeFilter::new(&tables, 3.5).run(&records, &QueryParams::new(30));
        assert_eq!(outcome.selected, Some(0));
    }

    #[test]
    fn test_vegetarian_excludes_meat_case_insensitively() {
        let tables = RecipeTables::default();
        let records = vec![
            record("Chili", 10, 5.0, &["1 lb Ground BEEF"]),
            record("Dal", 10, 4.0, &["1 cup lentils"]),
        ];
        let params = QueryParams::new(30).with_restriction(DietaryRestriction::Vegetarian);
        let (best, trace) = RecipeFilter::new(&tables, 3.5)
            .select_best(records, &params)
            .unwrap();
        assert_eq!(best.name, "Dal");
        assert_eq!(trace.after_diet, 1);
        assert!(trace.is_monotonic());
    }

    #[test]
    fn test_no_match_messages_distinguish_causes() {
        let missing = no_match_message(&PlannerError::data_unavailable("x.csv", "not found"));
        let strict = no_match_message(&PlannerError::NoCandidates);
        assert!(missing.starts_with("NO_MATCH"));
        assert!(missing.contains("unavailable"));
        assert!(strict.starts_with("NO_MATCH"));
        assert!(strict.contains("filters too strict"));
        assert!(strict.contains("search_web"));
    }
}
