// ABOUTME: Injectable lookup tables driving the deterministic recipe rules
// ABOUTME: Diet exclusions, nutrient directions, recalls, store minimums, categories, allergens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Lookup Tables
//!
//! Every keyword rule in the pipeline reads from a [`RecipeTables`] value so
//! callers and tests can swap the tables without touching the algorithms.
//! [`RecipeTables::default`] carries the built-in Canadian defaults.
//!
//! Keyword matching is always a case-insensitive substring test; entries are
//! stored lowercase. Tables that are scanned in order (countable items,
//! categories, allergens) are vectors, not maps, so the first match is stable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intelligence::recipes::models::{
    DietaryRestriction, NutrientDirection, NutrientKey, ShoppingCategory,
};

/// Note appended to salt lines by the scaler
pub const SODIUM_REDUCTION_NOTE: &str =
    "Health Canada: reduce salt by 50% or use a low-sodium alternative";

/// Note appended to butter and lard lines by the scaler
pub const FAT_SUBSTITUTION_NOTE: &str =
    "Health Canada: replace with an unsaturated oil such as canola where possible";

/// Note attached to shopping entries raised to a store minimum
pub const STORE_MINIMUM_NOTE: &str = "rounded up to store minimum";

const VEGETARIAN_EXCLUSIONS: &[&str] =
    &["chicken", "beef", "pork", "fish", "lamb", "shrimp", "seafood"];

const VEGAN_EXCLUSIONS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "lamb", "shrimp", "seafood", "egg", "milk", "butter",
    "cheese", "cream", "yogurt", "honey", "gelatin",
];

const PESCATARIAN_EXCLUSIONS: &[&str] =
    &["chicken", "beef", "pork", "lamb", "turkey", "bacon", "ham", "veal", "sausage"];

const GLUTEN_EXCLUSIONS: &[&str] = &[
    "flour", "wheat", "barley", "rye", "bread", "pasta", "couscous", "semolina", "noodle",
];

const DAIRY_EXCLUSIONS: &[&str] = &["milk", "butter", "cheese", "cream", "yogurt", "ghee", "whey"];

const NUT_EXCLUSIONS: &[&str] = &[
    "peanut", "almond", "walnut", "pecan", "cashew", "pistachio", "hazelnut", "macadamia",
    "pine nut",
];

const RECALL_KEYWORDS: &[&str] = &["romaine", "enoki", "cantaloupe", "raw milk cheese"];

// Longer names precede keywords they contain ("eggplant" before "egg")
const COUNTABLE_MINIMUMS: &[(&str, f64)] = &[
    ("eggplant", 1.0),
    ("egg", 6.0),
    ("tomato", 1.0),
    ("onion", 1.0),
    ("potato", 1.0),
    ("carrot", 1.0),
    ("lemon", 1.0),
    ("lime", 1.0),
    ("apple", 1.0),
    ("banana", 1.0),
    ("avocado", 1.0),
    ("bell pepper", 1.0),
    ("cucumber", 1.0),
    ("zucchini", 1.0),
];

const VOLUME_MINIMUMS: &[(&str, f64)] = &[
    ("cup", 1.0),
    ("tbsp", 1.0),
    ("tsp", 1.0),
    ("ml", 250.0),
    ("l", 1.0),
];

const WEIGHT_MINIMUMS: &[(&str, f64)] = &[("g", 100.0), ("oz", 4.0), ("lb", 1.0), ("kg", 1.0)];

const PRODUCE_KEYWORDS: &[&str] = &[
    "lettuce", "romaine", "tomato", "onion", "scallion", "garlic", "potato", "carrot", "celery",
    "bell pepper", "jalapeno", "spinach", "kale", "broccoli", "cauliflower", "cabbage",
    "cucumber", "zucchini", "squash", "mushroom", "lemon", "lime", "apple", "banana", "berries",
    "berry", "melon", "avocado", "cilantro", "parsley", "basil", "ginger", "eggplant",
];

const PROTEIN_KEYWORDS: &[&str] = &[
    "chicken", "beef", "steak", "pork", "lamb", "turkey", "bacon", "sausage", "ham", "fish",
    "salmon", "tuna", "shrimp", "tofu", "egg", "lentil", "chickpea", "bean",
];

const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "butter", "cream", "yogurt"];

const PANTRY_KEYWORDS: &[&str] = &[
    "flour", "sugar", "salt", "pepper", "oil", "vinegar", "rice", "pasta", "noodle", "bread",
    "baking", "yeast", "spice", "cinnamon", "cumin", "paprika", "oregano", "vanilla", "honey",
    "sauce", "stock", "broth", "oats", "cocoa", "chocolate",
];

const FROZEN_KEYWORDS: &[&str] = &["frozen", "ice"];

const BEVERAGE_KEYWORDS: &[&str] = &["water", "juice", "coffee", "tea", "wine", "beer", "soda"];

const PRIORITY_ALLERGENS: &[(&str, &[&str])] = &[
    ("peanuts", &["peanut"]),
    (
        "tree nuts",
        &[
            "almond", "walnut", "pecan", "cashew", "pistachio", "hazelnut", "macadamia",
            "pine nut", "brazil nut",
        ],
    ),
    ("milk", &["milk", "butter", "cheese", "cream", "yogurt", "whey"]),
    ("eggs", &["egg"]),
    ("fish", &["fish", "salmon", "tuna", "cod", "anchov", "halibut", "tilapia"]),
    (
        "crustaceans and molluscs",
        &[
            "shrimp", "prawn", "crab", "lobster", "clam", "mussel", "oyster", "scallop", "squid",
        ],
    ),
    ("sesame", &["sesame", "tahini"]),
    ("soy", &["soy", "tofu", "edamame", "miso"]),
    (
        "wheat and gluten",
        &["wheat", "flour", "barley", "rye", "bread", "pasta", "couscous", "semolina"],
    ),
    ("mustard", &["mustard"]),
    ("sulphites", &["wine", "sulphite", "sulfite", "dried apricot"]),
];

/// Lookup tables for diet exclusion, nutrient direction, recalls, store
/// minimums, shopping categories, adaptation notes, and allergens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeTables {
    /// Ingredient keywords excluded by each dietary restriction
    pub diet_exclusions: BTreeMap<DietaryRestriction, Vec<String>>,
    /// Direction of each nutrient limit; unlisted nutrients use their default
    pub nutrient_directions: BTreeMap<NutrientKey, NutrientDirection>,
    /// Ingredient keywords under an active recall
    pub recall_keywords: Vec<String>,
    /// Whole-item keywords with their minimum purchasable count, in match order
    pub countable_minimums: Vec<(String, f64)>,
    /// Minimum purchasable amount per volume unit abbreviation
    pub volume_minimums: BTreeMap<String, f64>,
    /// Minimum purchasable amount per weight unit abbreviation
    pub weight_minimums: BTreeMap<String, f64>,
    /// Category keyword sets, in match order
    pub categories: Vec<(ShoppingCategory, Vec<String>)>,
    /// Note for lines containing salt
    pub sodium_note: String,
    /// Note for lines containing butter or lard
    pub fat_note: String,
    /// Priority allergen labels with their ingredient keywords, in report order
    pub allergens: Vec<(String, Vec<String>)>,
}

impl Default for RecipeTables {
    fn default() -> Self {
        let diet_exclusions = [
            (DietaryRestriction::Vegetarian, VEGETARIAN_EXCLUSIONS),
            (DietaryRestriction::Vegan, VEGAN_EXCLUSIONS),
            (DietaryRestriction::Pescatarian, PESCATARIAN_EXCLUSIONS),
            (DietaryRestriction::GlutenFree, GLUTEN_EXCLUSIONS),
            (DietaryRestriction::DairyFree, DAIRY_EXCLUSIONS),
            (DietaryRestriction::NutFree, NUT_EXCLUSIONS),
        ]
        .into_iter()
        .map(|(restriction, keywords)| (restriction, owned(keywords)))
        .collect();

        let nutrient_directions = NutrientKey::ALL
            .into_iter()
            .map(|key| (key, default_direction(key)))
            .collect();

        let categories = [
            (ShoppingCategory::Produce, PRODUCE_KEYWORDS),
            (ShoppingCategory::Proteins, PROTEIN_KEYWORDS),
            (ShoppingCategory::Dairy, DAIRY_KEYWORDS),
            (ShoppingCategory::Pantry, PANTRY_KEYWORDS),
            (ShoppingCategory::Frozen, FROZEN_KEYWORDS),
            (ShoppingCategory::Beverages, BEVERAGE_KEYWORDS),
        ]
        .into_iter()
        .map(|(category, keywords)| (category, owned(keywords)))
        .collect();

        Self {
            diet_exclusions,
            nutrient_directions,
            recall_keywords: owned(RECALL_KEYWORDS),
            countable_minimums: owned_pairs(COUNTABLE_MINIMUMS),
            volume_minimums: owned_pairs(VOLUME_MINIMUMS).into_iter().collect(),
            weight_minimums: owned_pairs(WEIGHT_MINIMUMS).into_iter().collect(),
            categories,
            sodium_note: SODIUM_REDUCTION_NOTE.to_owned(),
            fat_note: FAT_SUBSTITUTION_NOTE.to_owned(),
            allergens: PRIORITY_ALLERGENS
                .iter()
                .map(|(label, keywords)| ((*label).to_owned(), owned(keywords)))
                .collect(),
        }
    }
}

impl RecipeTables {
    /// Exclusion keywords for a restriction, empty when the table has none
    #[must_use]
    pub fn diet_keywords(&self, restriction: DietaryRestriction) -> &[String] {
        self.diet_exclusions
            .get(&restriction)
            .map_or(&[], Vec::as_slice)
    }

    /// Configured direction for a nutrient
    #[must_use]
    pub fn direction(&self, key: NutrientKey) -> NutrientDirection {
        self.nutrient_directions
            .get(&key)
            .copied()
            .unwrap_or_else(|| default_direction(key))
    }

    /// Replace the recall keyword list, lowercasing entries
    #[must_use]
    pub fn with_recall_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.recall_keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Set the direction of one nutrient
    #[must_use]
    pub fn with_direction(mut self, key: NutrientKey, direction: NutrientDirection) -> Self {
        self.nutrient_directions.insert(key, direction);
        self
    }

    /// All notes the scaler may append, used to strip earlier annotations
    #[must_use]
    pub fn adaptation_notes(&self) -> [&str; 2] {
        [self.sodium_note.as_str(), self.fat_note.as_str()]
    }
}

/// Protein is a floor (at least this much); everything else is a ceiling
#[must_use]
pub const fn default_direction(key: NutrientKey) -> NutrientDirection {
    match key {
        NutrientKey::Protein => NutrientDirection::Floor,
        NutrientKey::Calories
        | NutrientKey::Sodium
        | NutrientKey::Fat
        | NutrientKey::Carbohydrates => NutrientDirection::Ceiling,
    }
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| (*k).to_owned()).collect()
}

fn owned_pairs(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
}
