// ABOUTME: Measurement unit recognition for free-text ingredient lines
// ABOUTME: Maps unit tokens (cups, tbsp, oz, ...) to IngredientUnit and count words
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Ingredient measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnit {
    /// Weight in grams
    Grams,
    /// Weight in kilograms
    Kilograms,
    /// Weight in ounces
    Ounces,
    /// Weight in pounds
    Pounds,
    /// Volume in milliliters
    Milliliters,
    /// Volume in liters
    Liters,
    /// US cups
    Cups,
    /// Tablespoons
    Tablespoons,
    /// Teaspoons
    Teaspoons,
    /// Count of whole items
    Pieces,
}

impl IngredientUnit {
    /// Recognize a unit token as written in a recipe line.
    ///
    /// Matching is case-insensitive and ignores a trailing period (`lb.`).
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let normalized = token.trim().trim_end_matches('.').to_lowercase();
        let unit = match normalized.as_str() {
            "g" | "gr" | "gram" | "grams" => Self::Grams,
            "kg" | "kgs" | "kilogram" | "kilograms" => Self::Kilograms,
            "oz" | "ounce" | "ounces" => Self::Ounces,
            "lb" | "lbs" | "pound" | "pounds" => Self::Pounds,
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Self::Milliliters
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Self::Liters,
            "c" | "cup" | "cups" => Self::Cups,
            "tbsp" | "tbs" | "tbl" | "tablespoon" | "tablespoons" => Self::Tablespoons,
            "tsp" | "teaspoon" | "teaspoons" => Self::Teaspoons,
            "pc" | "pcs" | "piece" | "pieces" => Self::Pieces,
            _ => return None,
        };
        Some(unit)
    }

    /// Check if this unit is a volume measurement
    #[must_use]
    pub const fn is_volume(&self) -> bool {
        matches!(
            self,
            Self::Milliliters | Self::Liters | Self::Cups | Self::Tablespoons | Self::Teaspoons
        )
    }

    /// Check if this unit is a weight measurement
    #[must_use]
    pub const fn is_weight(&self) -> bool {
        matches!(
            self,
            Self::Grams | Self::Ounces | Self::Pounds | Self::Kilograms
        )
    }

    /// Check if this unit is a count
    #[must_use]
    pub const fn is_count(&self) -> bool {
        matches!(self, Self::Pieces)
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Ounces => "oz",
            Self::Pounds => "lb",
            Self::Milliliters => "ml",
            Self::Liters => "l",
            Self::Cups => "cup",
            Self::Tablespoons => "tbsp",
            Self::Teaspoons => "tsp",
            Self::Pieces => "pc",
        }
    }
}

/// Container and count words that sit in the unit position of a line
/// ("2 cloves garlic", "1 can tomatoes") without being measurements.
const MEASURE_WORDS: &[&str] = &[
    "bunch", "bunches", "can", "cans", "clove", "cloves", "container", "containers", "dash",
    "dashes", "envelope", "envelopes", "head", "heads", "jar", "jars", "package", "packages",
    "pkg", "pinch", "pinches", "pint", "pints", "quart", "quarts", "slice", "slices", "sprig",
    "sprigs", "stalk", "stalks", "stick", "sticks",
];

/// Canonical form of a unit token, or `None` if the token is not a unit.
///
/// Measurement units collapse to their abbreviation; count words are kept
/// lowercase as written.
#[must_use]
pub fn canonical_unit(token: &str) -> Option<String> {
    if let Some(unit) = IngredientUnit::from_token(token) {
        return Some(unit.abbreviation().to_owned());
    }
    let normalized = token.trim().trim_end_matches('.').to_lowercase();
    MEASURE_WORDS
        .contains(&normalized.as_str())
        .then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tokens_collapse_to_abbreviations() {
        assert_eq!(IngredientUnit::from_token("Cups"), Some(IngredientUnit::Cups));
        assert_eq!(IngredientUnit::from_token("lb."), Some(IngredientUnit::Pounds));
        assert_eq!(IngredientUnit::from_token("large"), None);
        assert_eq!(canonical_unit("Tablespoons").as_deref(), Some("tbsp"));
        assert_eq!(canonical_unit("cloves").as_deref(), Some("cloves"));
        assert_eq!(canonical_unit("chopped"), None);
    }

    #[test]
    fn test_unit_families() {
        assert!(IngredientUnit::Liters.is_volume());
        assert!(IngredientUnit::Ounces.is_weight());
        assert!(IngredientUnit::Pieces.is_count());
        assert!(!IngredientUnit::Cups.is_weight());
    }
}
