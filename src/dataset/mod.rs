// ABOUTME: Reference dataset loader reading recipe records from a CSV file
// ABOUTME: Tolerates extra and missing columns and skips rows that fail to decode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Dataset
//!
//! The reference dataset is a CSV file with a header row. Recognized columns
//! are `recipe_name`, `prep_time`, `cook_time`, `total_time`, `servings`,
//! `ingredients`, `directions`, `rating`, `url`, `cuisine_path`, `nutrition`
//! and `timing`; header matching ignores case and surrounding whitespace.
//! Unknown columns are ignored and missing columns take the record defaults.
//!
//! The file is read fresh on every call. There is no cache.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::PlannerError;
use crate::intelligence::recipes::models::RecipeRecord;

/// Read every decodable record from the dataset at `path`.
///
/// # Errors
///
/// Returns [`PlannerError::DataUnavailable`] when the file cannot be opened
/// or has no header row. Individual rows that fail to decode are skipped.
pub fn load_records(path: &Path) -> Result<Vec<RecipeRecord>, PlannerError> {
    let origin = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| PlannerError::data_unavailable(origin.clone(), e.to_string()))?;
    load_from_reader(file, &origin)
}

/// Read records from any CSV source; `origin` names it in logs and errors.
///
/// # Errors
///
/// Returns [`PlannerError::DataUnavailable`] when the header row cannot be
/// read or is empty.
pub fn load_from_reader<R: Read>(
    reader: R,
    origin: &str,
) -> Result<Vec<RecipeRecord>, PlannerError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| PlannerError::data_unavailable(origin, e.to_string()))?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(PlannerError::data_unavailable(origin, "missing header row"));
    }
    let has_recipe_name = headers.iter().any(|h| h == "recipe_name");

    let mut records = Vec::new();
    let mut skipped = 0_usize;

    for (index, row) in csv_reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(
                    dataset = %origin,
                    row = index + 1,
                    error = %e,
                    "Skipping unreadable dataset row"
                );
                skipped += 1;
                continue;
            }
        };

        let mut fields = Map::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            if header.is_empty() || (has_recipe_name && header == "name") {
                continue;
            }
            fields.insert(header.clone(), Value::String(cell.to_owned()));
        }

        match serde_json::from_value::<RecipeRecord>(Value::Object(fields)) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!(
                    dataset = %origin,
                    row = index + 1,
                    error = %e,
                    "Skipping undecodable dataset row"
                );
                skipped += 1;
            }
        }
    }

    debug!(
        dataset = %origin,
        records = records.len(),
        skipped,
        "Loaded recipe dataset"
    );

    Ok(records)
}

/// Sorted distinct first segments of the records' cuisine paths.
///
/// `/Desserts/Cakes/` contributes `Desserts`; empty paths contribute nothing.
#[must_use]
pub fn recipe_types(records: &[RecipeRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| {
            record
                .cuisine_path
                .split('/')
                .map(str::trim)
                .find(|segment| !segment.is_empty())
                .map(str::to_owned)
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
