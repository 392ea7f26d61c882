// ABOUTME: Data models for the recipe pipeline: records, query constraints, shopping lists
// ABOUTME: Defines RecipeRecord, NutrientKey, QueryParams, Quantity, and ShoppingList types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use food_planner_core::constants::sentinels::TO_TASTE;

use super::text::{format_display_quantity, leading_number, split_list_field};
use crate::errors::PlannerError;

// ============================================================================
// Recipe records
// ============================================================================

/// Preparation or cooking time as found in the source
///
/// Datasets carry either integer minutes or free text such as `"1 hr 30 mins"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TimeField {
    /// Whole minutes
    Minutes(i64),
    /// Free-text duration
    Text(String),
}

/// Nutrition summary as found in the source
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NutritionField {
    /// Mapping of nutrient name to value (`{"sodium": "281mg"}`)
    Facts(BTreeMap<String, Value>),
    /// Free-text summary (`"Total Fat 18g, Sodium 281mg"`)
    Text(String),
}

/// A recipe as read from the reference dataset or received from the caller
///
/// Deserialization is lenient: numeric fields accept numbers or numeric
/// strings, list fields accept arrays or delimited text, and missing fields
/// take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe title
    #[serde(
        rename = "recipe_name",
        alias = "name",
        default,
        deserialize_with = "lenient::string"
    )]
    pub name: String,
    /// Preparation time
    #[serde(default, deserialize_with = "lenient::time")]
    pub prep_time: Option<TimeField>,
    /// Cooking time
    #[serde(default, deserialize_with = "lenient::time")]
    pub cook_time: Option<TimeField>,
    /// Total time, the field the time ceiling applies to
    #[serde(default, deserialize_with = "lenient::time")]
    pub total_time: Option<TimeField>,
    /// Number of servings the quantities are written for
    #[serde(default, deserialize_with = "lenient::servings")]
    pub servings: i64,
    /// Ingredient lines in recipe order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub ingredients: Vec<String>,
    /// Direction steps in recipe order
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub directions: Vec<String>,
    /// Average user rating, 0.0 when missing or invalid
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: f64,
    /// Source URL
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    /// Slash-delimited category path (`/Desserts/Cakes/`)
    #[serde(default, deserialize_with = "lenient::string")]
    pub cuisine_path: String,
    /// Nutrition summary
    #[serde(default, deserialize_with = "lenient::nutrition")]
    pub nutrition: Option<NutritionField>,
    /// Extra timing notes, carried through unchanged
    #[serde(default)]
    pub timing: Option<Value>,
}

impl RecipeRecord {
    /// Create an empty record with a name and serving count
    #[must_use]
    pub fn new(name: impl Into<String>, servings: i64) -> Self {
        Self {
            name: name.into(),
            prep_time: None,
            cook_time: None,
            total_time: None,
            servings,
            ingredients: Vec::new(),
            directions: Vec::new(),
            rating: 0.0,
            url: String::new(),
            cuisine_path: String::new(),
            nutrition: None,
            timing: None,
        }
    }

    /// Serving count used as a divisor; zero and negative counts clamp to 1
    #[must_use]
    pub fn effective_servings(&self) -> i64 {
        self.servings.max(1)
    }

    /// Lowercased ingredient text used for keyword matching
    #[must_use]
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join("\n").to_lowercase()
    }

    /// Decode a recipe received over the tool boundary.
    ///
    /// Accepts an object, a JSON-encoded object string, or a one-element array
    /// wrapping either. The object must carry an `ingredients` list.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::MalformedInput`] when the payload is not a
    /// recipe object or its ingredients are not a list of strings.
    pub fn from_tool_value(value: &Value) -> Result<Self, PlannerError> {
        let object = unwrap_recipe_object(value)?;

        match object.get("ingredients") {
            Some(Value::Array(items)) => {
                if let Some(bad) = items.iter().find(|item| !item.is_string()) {
                    return Err(PlannerError::malformed(format!(
                        "ingredients must be strings, found {bad}"
                    )));
                }
            }
            Some(Value::String(_)) => {}
            Some(other) => {
                return Err(PlannerError::malformed(format!(
                    "ingredients must be a list of strings, found {other}"
                )));
            }
            None => return Err(PlannerError::malformed("recipe has no ingredients field")),
        }

        serde_json::from_value(Value::Object(object))
            .map_err(|e| PlannerError::malformed(format!("invalid recipe: {e}")))
    }
}

fn unwrap_recipe_object(value: &Value) -> Result<Map<String, Value>, PlannerError> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::String(text) => {
            let decoded: Value = serde_json::from_str(text)
                .map_err(|e| PlannerError::malformed(format!("recipe is not valid JSON: {e}")))?;
            match decoded {
                Value::String(_) => Err(PlannerError::malformed(
                    "recipe must be a JSON object, found a string",
                )),
                other => unwrap_recipe_object(&other),
            }
        }
        Value::Array(items) if items.len() == 1 => unwrap_recipe_object(&items[0]),
        Value::Array(items) => Err(PlannerError::malformed(format!(
            "expected a single recipe, found a list of {}",
            items.len()
        ))),
        other => Err(PlannerError::malformed(format!(
            "recipe must be a JSON object, found {other}"
        ))),
    }
}

/// Field deserializers that coerce instead of failing
mod lenient {
    use super::{
        leading_number, split_list_field, Deserialize, Deserializer, NutritionField, TimeField,
        Value,
    };
    use serde::de::Error as _;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        })
    }

    pub fn servings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let servings = match &value {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.round() as i64)),
            Value::String(s) => leading_number(s).map(|v| v.round() as i64),
            _ => None,
        };
        Ok(servings.unwrap_or(0))
    }

    pub fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let rating = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(rating.filter(|v| v.is_finite()).unwrap_or(0.0))
    }

    pub fn string_list<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Vec::new()),
            Value::String(s) => Ok(split_list_field(&s)),
            Value::Array(items) => items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(D::Error::custom(format!("expected a string, found {other}"))),
                })
                .collect(),
            other => Err(D::Error::custom(format!(
                "expected a list of strings, found {other}"
            ))),
        }
    }

    pub fn time<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TimeField>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v.round() as i64))
                .map(TimeField::Minutes),
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(TimeField::Text(s)),
            _ => None,
        })
    }

    pub fn nutrition<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NutritionField>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(map) => Some(NutritionField::Facts(map.into_iter().collect())),
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => match serde_json::from_str::<Value>(&s) {
                Ok(Value::Object(map)) => Some(NutritionField::Facts(map.into_iter().collect())),
                _ => Some(NutritionField::Text(s)),
            },
            _ => None,
        })
    }
}

// ============================================================================
// Query constraints
// ============================================================================

/// Nutrient a constraint can be placed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKey {
    /// Energy in kcal
    Calories,
    /// Sodium in mg
    Sodium,
    /// Total fat in g
    Fat,
    /// Protein in g
    Protein,
    /// Total carbohydrate in g
    Carbohydrates,
}

impl NutrientKey {
    /// Every nutrient key
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Sodium,
        Self::Fat,
        Self::Protein,
        Self::Carbohydrates,
    ];

    /// Canonical key name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Sodium => "sodium",
            Self::Fat => "fat",
            Self::Protein => "protein",
            Self::Carbohydrates => "carbohydrates",
        }
    }

    /// Labels searched for in free-text nutrition, most specific first
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        match self {
            Self::Calories => &["calories", "kcal"],
            Self::Sodium => &["sodium"],
            Self::Fat => &["total fat", "fat"],
            Self::Protein => &["protein"],
            Self::Carbohydrates => &["total carbohydrate", "carbohydrates", "carbohydrate", "carbs"],
        }
    }

    /// Resolve a key name or alias (`carbs`, `total fat`, `kcal`)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['_', '-'], " ");
        let key = match normalized.as_str() {
            "calories" | "calorie" | "kcal" => Self::Calories,
            "sodium" | "sodium content" => Self::Sodium,
            "fat" | "total fat" | "fat content" => Self::Fat,
            "protein" | "proteins" | "protein content" => Self::Protein,
            "carbohydrates" | "carbohydrate" | "carbs" | "carb" | "total carbohydrate"
            | "total carbohydrates" | "carbohydrate content" => Self::Carbohydrates,
            _ => return None,
        };
        Some(key)
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutrientKey {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| PlannerError::malformed(format!("unknown nutrient: {s}")))
    }
}

/// Which side of a limit a nutrient value must fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientDirection {
    /// Keep values at or below the limit
    Ceiling,
    /// Keep values at or above the limit
    Floor,
}

impl NutrientDirection {
    /// Check a value against a limit in this direction
    #[must_use]
    pub fn admits(self, value: f64, limit: f64) -> bool {
        match self {
            Self::Ceiling => value <= limit,
            Self::Floor => value >= limit,
        }
    }
}

/// Per-nutrient numeric limits; an absent key is unconstrained
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NutrientConstraints(BTreeMap<NutrientKey, f64>);

impl NutrientConstraints {
    /// No constraints
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace a limit
    #[must_use]
    pub fn with(mut self, key: NutrientKey, limit: f64) -> Self {
        self.0.insert(key, limit);
        self
    }

    /// Limit for a nutrient, if any
    #[must_use]
    pub fn get(&self, key: NutrientKey) -> Option<f64> {
        self.0.get(&key).copied()
    }

    /// Iterate limits in key order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Whether no limits are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of limits set
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Build constraints from a JSON mapping, dropping entries that are not
    /// a known nutrient with a finite numeric limit.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut constraints = Self::new();
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return constraints,
            other => {
                warn!(constraints = %other, "Ignoring nutrient constraints that are not a mapping");
                return constraints;
            }
        };

        for (name, raw) in map {
            let Some(key) = NutrientKey::from_label(name) else {
                warn!(nutrient = %name, "Ignoring constraint on unknown nutrient");
                continue;
            };
            let limit = match raw {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            match limit.filter(|v| v.is_finite()) {
                Some(limit) => constraints.0.insert(key, limit),
                None => {
                    warn!(nutrient = %key, limit = %raw, "Ignoring non-numeric nutrient limit");
                    continue;
                }
            };
        }

        constraints
    }
}

/// Dietary restriction tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Fish allowed, no other meat
    Pescatarian,
    /// No wheat, barley, or rye
    GlutenFree,
    /// No milk products
    DairyFree,
    /// No peanuts or tree nuts
    NutFree,
}

impl DietaryRestriction {
    /// Canonical tag name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::NutFree => "nut_free",
        }
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryRestriction {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();
        match normalized.as_str() {
            "vegetarian" | "veggie" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            "pescatarian" | "pescetarian" => Ok(Self::Pescatarian),
            "glutenfree" | "nogluten" => Ok(Self::GlutenFree),
            "dairyfree" | "nodairy" | "lactosefree" => Ok(Self::DairyFree),
            "nutfree" | "nonuts" => Ok(Self::NutFree),
            _ => Err(PlannerError::malformed(format!(
                "unknown dietary restriction: {s}"
            ))),
        }
    }
}

/// Constraints for selecting a local recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParams {
    /// Ceiling on total time in minutes
    pub max_total_time: u32,
    /// Restrictions to exclude by ingredient keyword
    pub dietary_restrictions: Vec<DietaryRestriction>,
    /// Case-insensitive substring of the cuisine path
    pub recipe_type: Option<String>,
    /// Per-nutrient limits
    pub constraints: NutrientConstraints,
}

impl QueryParams {
    /// Query with only a time ceiling
    #[must_use]
    pub const fn new(max_total_time: u32) -> Self {
        Self {
            max_total_time,
            dietary_restrictions: Vec::new(),
            recipe_type: None,
            constraints: NutrientConstraints::new(),
        }
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: DietaryRestriction) -> Self {
        if !self.dietary_restrictions.contains(&restriction) {
            self.dietary_restrictions.push(restriction);
        }
        self
    }

    /// Require a recipe type; blank values are ignored
    #[must_use]
    pub fn with_recipe_type(mut self, recipe_type: impl Into<String>) -> Self {
        let recipe_type = recipe_type.into();
        self.recipe_type = (!recipe_type.trim().is_empty()).then_some(recipe_type);
        self
    }

    /// Add a nutrient limit
    #[must_use]
    pub fn with_constraint(mut self, key: NutrientKey, limit: f64) -> Self {
        self.constraints = self.constraints.with(key, limit);
        self
    }

    /// Decode query arguments received over the tool boundary.
    ///
    /// `dietary_restrictions` (alias `diet_type`) may be a list or a single
    /// tag; unknown tags are logged and ignored. Invalid nutrient limits are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::MalformedInput`] when `max_total_time` is
    /// missing, negative, or not a number.
    pub fn from_value(args: &Value) -> Result<Self, PlannerError> {
        let max_total_time = match args.get("max_total_time") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| {
            PlannerError::malformed("max_total_time must be a non-negative number of minutes")
        })?;

        let mut params = Self::new(max_total_time.floor().min(f64::from(u32::MAX)) as u32);

        let tags = args
            .get("dietary_restrictions")
            .or_else(|| args.get("diet_type"));
        for tag in restriction_tags(tags) {
            if tag.trim().is_empty() || tag.trim().eq_ignore_ascii_case("none") {
                continue;
            }
            match tag.parse::<DietaryRestriction>() {
                Ok(restriction) => params = params.with_restriction(restriction),
                Err(e) => warn!(tag = %tag, error = %e, "Ignoring unknown dietary restriction"),
            }
        }

        if let Some(Value::String(recipe_type)) = args.get("recipe_type") {
            params = params.with_recipe_type(recipe_type.trim());
        }

        if let Some(constraints) = args
            .get("constraints")
            .or_else(|| args.get("nutrient_constraints"))
        {
            params.constraints = NutrientConstraints::from_value(constraints);
        }

        Ok(params)
    }
}

fn restriction_tags(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(tag)) => vec![tag.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}

// ============================================================================
// Ingredient lines and shopping lists
// ============================================================================

/// Amount of an ingredient, or the "to taste" placeholder
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// Numeric amount in the line's unit
    Amount(f64),
    /// No amount given
    ToTaste,
}

impl Quantity {
    /// Numeric amount, if any
    #[must_use]
    pub const fn amount(&self) -> Option<f64> {
        match self {
            Self::Amount(value) => Some(*value),
            Self::ToTaste => None,
        }
    }

    /// Whether this is the "to taste" placeholder
    #[must_use]
    pub const fn is_to_taste(&self) -> bool {
        matches!(self, Self::ToTaste)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(value) => f.write_str(&format_display_quantity(*value)),
            Self::ToTaste => f.write_str(TO_TASTE),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Amount(value) => serializer.serialize_f64(*value),
            Self::ToTaste => serializer.serialize_str(TO_TASTE),
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_f64()
                .map(Self::Amount)
                .ok_or_else(|| D::Error::custom("quantity out of range")),
            Value::String(s) if s.trim().eq_ignore_ascii_case(TO_TASTE) => Ok(Self::ToTaste),
            other => Err(D::Error::custom(format!("invalid quantity: {other}"))),
        }
    }
}

/// An ingredient line decomposed into quantity, unit, and name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientLine {
    /// Leading quantity
    pub quantity: Quantity,
    /// Canonical unit or count word
    pub unit: Option<String>,
    /// Canonical ingredient name
    pub name: String,
    /// Adaptation notes attached to the line
    pub notes: Vec<String>,
}

/// Store section an ingredient is bought from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShoppingCategory {
    /// Fresh fruit, vegetables, and herbs
    Produce,
    /// Meat, fish, eggs, tofu, legumes
    Proteins,
    /// Milk, cheese, butter, yogurt
    Dairy,
    /// Shelf-stable staples
    Pantry,
    /// Frozen goods
    Frozen,
    /// Drinks
    Beverages,
    /// Anything unmatched
    Other,
}

impl ShoppingCategory {
    /// Categories with keyword tables, in matching order
    pub const ORDERED: [Self; 6] = [
        Self::Produce,
        Self::Proteins,
        Self::Dairy,
        Self::Pantry,
        Self::Frozen,
        Self::Beverages,
    ];

    /// Every category in display order, `Other` last
    pub const DISPLAY_ORDER: [Self; 7] = [
        Self::Produce,
        Self::Proteins,
        Self::Dairy,
        Self::Pantry,
        Self::Frozen,
        Self::Beverages,
        Self::Other,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Proteins => "Proteins",
            Self::Dairy => "Dairy",
            Self::Pantry => "Pantry",
            Self::Frozen => "Frozen",
            Self::Beverages => "Beverages",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ShoppingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One item to buy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingEntry {
    /// Store section
    pub category: ShoppingCategory,
    /// Canonical ingredient name
    pub name: String,
    /// Amount to buy after store-minimum rounding
    pub quantity: Quantity,
    /// Unit of the amount
    pub unit: Option<String>,
    /// Normalization note, if the amount was adjusted
    pub note: Option<String>,
}

/// Entries of one store section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    /// Store section
    pub category: ShoppingCategory,
    /// Items in first-seen order
    pub entries: Vec<ShoppingEntry>,
}

/// Shopping list for a scaled recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingList {
    /// Recipe the list was built for
    pub recipe_name: String,
    /// Servings the quantities cover
    pub servings: i64,
    /// Non-empty sections in display order
    pub categories: Vec<CategoryGroup>,
    /// Deterministic plain-text rendering
    pub formatted_text: String,
}

impl ShoppingList {
    /// Total number of entries across sections
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|group| group.entries.len()).sum()
    }

    /// Entries of one section, empty if the section has none
    #[must_use]
    pub fn entries_in(&self, category: ShoppingCategory) -> &[ShoppingEntry] {
        self.categories
            .iter()
            .find(|group| group.category == category)
            .map_or(&[], |group| group.entries.as_slice())
    }
}
