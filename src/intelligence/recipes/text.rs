// ABOUTME: Tolerant parsers for free-text recipe fields (durations, nutrition, quantities)
// ABOUTME: Every parser has a single documented fallback instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Free-Text Field Normalizer
//!
//! Recipe datasets mix formats freely: `"1 hr 30 mins"`, `"45"`, `90`,
//! `"Sodium 281mg 12%"`, `{'sodium': 281}`, `"1 1/2 cups flour"`. The parsers
//! here accept all of them and fall back to a fixed value on anything else:
//!
//! | Parser | Grammar | Fallback |
//! |--------|---------|----------|
//! | [`parse_duration`] | `(<number> <day\|hr\|hour\|min\|minute>[s])+` or bare digits | [`UNKNOWN_DURATION_MINUTES`] |
//! | [`parse_nutrient`] | `<label> [:'"= ]* [(<unit>)] <number>` | `0.0` |
//! | [`parse_leading_quantity`] | `<int> <int>/<int>` \| `<int>/<int>` \| `<decimal>` \| `<int>` | `None` |

use std::sync::LazyLock;

use food_planner_core::constants::pipeline::{
    SCALED_QUANTITY_DECIMALS, UNKNOWN_DURATION_MINUTES,
};
use regex::Regex;
use serde_json::Value;

use super::models::{NutrientKey, NutritionField, TimeField};

const MINUTES_PER_DAY: f64 = 1440.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Mixed number, simple fraction, decimal (including `.5`), or integer
const NUMBER_GRAMMAR: &str = r"\d+\s+\d+/\d+|\d+/\d+|\d*\.\d+|\d+";

static DURATION_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 2 days, 1 hr, 1 1/2 hours, .5 hours, 30 mins, 45minutes
    // Left boundary keeps the `2` of `1/2` from matching on its own
    Regex::new(&format!(
        r"(?i)(?:^|[^\d/.])({NUMBER_GRAMMAR})\s*(days?|hours?|hrs?|minutes?|mins?)\b"
    ))
    .ok()
});

static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches at line start: "1 1/2", "3/4", "0.5", ".5", "2"
    Regex::new(&format!(r"^\s*({NUMBER_GRAMMAR})")).ok()
});

static NUMBER_PREFIX_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").ok());

static NUTRIENT_PATTERNS: LazyLock<Vec<(NutrientKey, Vec<Regex>)>> = LazyLock::new(|| {
    NutrientKey::ALL
        .iter()
        .map(|key| {
            let patterns = key
                .labels()
                .iter()
                .filter_map(|label| {
                    Regex::new(&format!(
                        r#"(?i)\b{}\b[\s:'"=]*(?:\([^)]*\))?[\s:'"=]*(\d+(?:\.\d+)?)"#,
                        regex::escape(label)
                    ))
                    .ok()
                })
                .collect();
            (*key, patterns)
        })
        .collect()
});

/// Convert a free-text duration to whole minutes.
///
/// Sums every `<number> <unit>` pair found in the string, where the number
/// may be a mixed number, a fraction, or a decimal. A string with no unit
/// tokens that is purely digits is read as minutes. Anything else, including
/// the empty string or a fraction over zero, yields
/// [`UNKNOWN_DURATION_MINUTES`] so the record fails every finite time ceiling.
#[must_use]
pub fn parse_duration(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return UNKNOWN_DURATION_MINUTES;
    }

    let mut total = 0.0_f64;
    let mut matched = false;
    if let Some(pattern) = DURATION_PATTERN.as_ref() {
        for cap in pattern.captures_iter(trimmed) {
            let (Some(value), Some(unit)) = (cap.get(1), cap.get(2)) else {
                continue;
            };
            let Some(value) = number_value(value.as_str()) else {
                return UNKNOWN_DURATION_MINUTES;
            };
            total += value * unit_multiplier(unit.as_str());
            matched = true;
        }
    }

    if matched {
        return total.round().min(f64::from(u32::MAX)) as u32;
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return trimmed
            .parse::<u64>()
            .map_or(UNKNOWN_DURATION_MINUTES, |minutes| {
                u32::try_from(minutes).unwrap_or(u32::MAX)
            });
    }

    UNKNOWN_DURATION_MINUTES
}

fn unit_multiplier(unit: &str) -> f64 {
    let unit = unit.to_lowercase();
    if unit.starts_with("day") {
        MINUTES_PER_DAY
    } else if unit.starts_with('h') {
        MINUTES_PER_HOUR
    } else {
        1.0
    }
}

/// Minutes for an optional time field of either source format
#[must_use]
pub fn parse_time_field(field: Option<&TimeField>) -> u32 {
    match field {
        Some(TimeField::Minutes(minutes)) => {
            if *minutes < 0 {
                UNKNOWN_DURATION_MINUTES
            } else {
                u32::try_from(*minutes).unwrap_or(u32::MAX)
            }
        }
        Some(TimeField::Text(text)) => parse_duration(text),
        None => UNKNOWN_DURATION_MINUTES,
    }
}

/// Find the value reported for `key` in a free-text nutrition summary.
///
/// Returns `0.0` when no label for the key is followed by a number; a
/// missing value and a reported zero are deliberately indistinguishable.
#[must_use]
pub fn parse_nutrient(text: &str, key: NutrientKey) -> f64 {
    let Some((_, patterns)) = NUTRIENT_PATTERNS.iter().find(|(k, _)| *k == key) else {
        return 0.0;
    };

    patterns
        .iter()
        .find_map(|pattern| {
            pattern
                .captures(text)
                .and_then(|cap| cap.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok())
        })
        .unwrap_or(0.0)
}

/// Nutrient value from either nutrition representation
#[must_use]
pub fn nutrient_value(field: Option<&NutritionField>, key: NutrientKey) -> f64 {
    match field {
        Some(NutritionField::Text(text)) => parse_nutrient(text, key),
        Some(NutritionField::Facts(facts)) => facts
            .iter()
            .find(|(name, _)| NutrientKey::from_label(name) == Some(key))
            .map_or(0.0, |(_, value)| numeric_value(value)),
        None => 0.0,
    }
}

/// Read a JSON number or the numeric prefix of a string (`"281mg"` → 281)
#[must_use]
pub fn numeric_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => leading_number(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parse the signed decimal at the start of a string
#[must_use]
pub fn leading_number(text: &str) -> Option<f64> {
    NUMBER_PREFIX_PATTERN
        .as_ref()?
        .captures(text)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// A numeric token found at the start of an ingredient line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityToken {
    /// Numeric value of the token
    pub value: f64,
    /// Byte offset where the token starts (after leading whitespace)
    pub start: usize,
    /// Byte offset one past the end of the token
    pub end: usize,
}

/// Locate the leading quantity of an ingredient line.
///
/// Recognizes mixed numbers (`1 1/2`), simple fractions (`3/4`), decimals and
/// integers. Returns `None` when the line does not start with a number or the
/// fraction has a zero denominator.
#[must_use]
pub fn parse_leading_quantity(line: &str) -> Option<QuantityToken> {
    let cap = QUANTITY_PATTERN.as_ref()?.captures(line)?;
    let token = cap.get(1)?;
    let value = number_value(token.as_str())?;
    Some(QuantityToken {
        value,
        start: token.start(),
        end: token.end(),
    })
}

/// Value of a token matched by [`NUMBER_GRAMMAR`]
fn number_value(token: &str) -> Option<f64> {
    let mut parts = token.split_whitespace();
    let first = parts.next()?;
    let value = match parts.next() {
        Some(fraction) => first.parse::<f64>().ok()? + simple_number(fraction)?,
        None => simple_number(first)?,
    };
    value.is_finite().then_some(value)
}

fn simple_number(token: &str) -> Option<f64> {
    match token.split_once('/') {
        Some((numerator, denominator)) => fraction_value(numerator, denominator),
        None => token.parse::<f64>().ok(),
    }
}

fn fraction_value(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator = numerator.parse::<f64>().ok()?;
    let denominator = denominator.parse::<f64>().ok()?;
    (denominator != 0.0).then(|| numerator / denominator)
}

/// Round to the number of decimals kept after scaling
#[must_use]
pub fn round_quantity(value: f64) -> f64 {
    let factor = 10_f64.powi(SCALED_QUANTITY_DECIMALS);
    (value * factor).round() / factor
}

/// Render a scaled quantity for substitution into an ingredient line.
///
/// Whole values keep one decimal place (`2.0`), others use the shortest
/// representation of the rounded value (`1.33`).
#[must_use]
pub fn format_scaled_quantity(value: f64) -> String {
    let rounded = round_quantity(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Render a quantity for display without trailing zeros (`2`, `0.5`, `1.33`)
#[must_use]
pub fn format_display_quantity(value: f64) -> String {
    let rounded = round_quantity(value);
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

/// Split a list-valued dataset cell into its items.
///
/// Accepts a bracketed list of quoted strings (`["a", "b"]` or `['a', 'b']`),
/// newline-, `|`- or `;`-separated text, and finally comma-separated text.
#[must_use]
pub fn split_list_field(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        let quoted = quoted_items(trimmed);
        if !quoted.is_empty() {
            return quoted;
        }
        return split_list_field(&trimmed[1..trimmed.len() - 1]);
    }

    let separator = ['\n', '|', ';', ',']
        .into_iter()
        .find(|sep| trimmed.contains(*sep));

    separator.map_or_else(
        || vec![trimmed.to_owned()],
        |sep| {
            trimmed
                .split(sep)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()
        },
    )
}

/// Collect every single- or double-quoted string, honoring backslash escapes
fn quoted_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\'' && c != '"' {
            continue;
        }
        let quote = c;
        let mut item = String::new();
        let mut closed = false;
        while let Some(next) = chars.next() {
            match next {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        item.push(escaped);
                    }
                }
                _ if next == quote => {
                    closed = true;
                    break;
                }
                _ => item.push(next),
            }
        }
        if !closed {
            break;
        }
        let item = item.trim();
        if !item.is_empty() {
            items.push(item.to_owned());
        }
    }

    items
}
