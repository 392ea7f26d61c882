// ABOUTME: Shopping list builder turning scaled ingredient lines into store-ready entries
// ABOUTME: Parses quantity/unit/name, applies store minimums, categorizes, and renders text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Shopping List Builder
//!
//! Pipeline per ingredient line:
//!
//! 1. Strip adaptation notes added by the scaler.
//! 2. Split into leading quantity, optional unit or count word, and name.
//! 3. Raise the quantity to a store-purchasable minimum (whole items first,
//!    then volume units, then weight units).
//! 4. Assign the first matching store category.
//!
//! Entries are then grouped by category in display order. A name seen twice
//! keeps its first entry; quantities are not summed.

use std::collections::HashSet;
use std::fmt::Write as _;

use serde_json::Value;
use tracing::debug;

use super::models::{
    CategoryGroup, IngredientLine, Quantity, RecipeRecord, ShoppingCategory, ShoppingEntry,
    ShoppingList,
};
use super::scaling::split_adaptation_notes;
use super::text::parse_leading_quantity;
use super::units::{canonical_unit, IngredientUnit};
use crate::config::tables::{RecipeTables, STORE_MINIMUM_NOTE};
use crate::errors::PlannerError;

/// Quantity after store-minimum rounding
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuantity {
    /// Amount to buy
    pub quantity: Quantity,
    /// Set when the amount was raised
    pub note: Option<String>,
}

/// Builds shopping lists from the lookup tables
#[derive(Debug, Clone, Copy)]
pub struct ShoppingListBuilder<'a> {
    tables: &'a RecipeTables,
}

impl<'a> ShoppingListBuilder<'a> {
    /// Builder over the given tables
    #[must_use]
    pub const fn new(tables: &'a RecipeTables) -> Self {
        Self { tables }
    }

    /// Decompose one ingredient line
    #[must_use]
    pub fn parse_line(&self, line: &str) -> IngredientLine {
        let (bare, notes) = split_adaptation_notes(line, &self.tables.adaptation_notes());

        let (quantity, rest) = parse_leading_quantity(bare).map_or_else(
            || (Quantity::ToTaste, bare),
            |token| (Quantity::Amount(token.value), &bare[token.end..]),
        );

        let rest = skip_parenthetical(rest.trim_start());
        let (unit, rest) = split_unit(rest);
        let name = canonical_name(rest).unwrap_or_else(|| bare.trim().to_lowercase());

        IngredientLine {
            quantity,
            unit,
            name,
            notes,
        }
    }

    /// Raise a quantity to the smallest amount a store sells.
    ///
    /// The first matching rule applies: whole-item keyword in the name, then
    /// piece counts rounded up to whole items, then volume unit, then weight
    /// unit. "To taste" always passes through.
    #[must_use]
    pub fn normalize_quantity(
        &self,
        quantity: Quantity,
        unit: Option<&str>,
        name: &str,
    ) -> NormalizedQuantity {
        let Quantity::Amount(value) = quantity else {
            return NormalizedQuantity {
                quantity,
                note: None,
            };
        };

        let lowered = name.to_lowercase();
        let countable = self
            .tables
            .countable_minimums
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.as_str()));

        let counted_in_pieces = unit
            .and_then(IngredientUnit::from_token)
            .is_some_and(|parsed| parsed.is_count());

        let adjusted = if let Some((_, minimum)) = countable {
            value.ceil().max(*minimum)
        } else if counted_in_pieces {
            value.ceil()
        } else if let Some(minimum) = unit.and_then(|u| self.unit_minimum(u)) {
            value.max(minimum)
        } else {
            value
        };

        let note = ((adjusted - value).abs() > f64::EPSILON).then(|| STORE_MINIMUM_NOTE.to_owned());
        NormalizedQuantity {
            quantity: Quantity::Amount(adjusted),
            note,
        }
    }

    fn unit_minimum(&self, unit: &str) -> Option<f64> {
        let parsed = IngredientUnit::from_token(unit)?;
        let table = if parsed.is_volume() {
            &self.tables.volume_minimums
        } else if parsed.is_weight() {
            &self.tables.weight_minimums
        } else {
            return None;
        };
        table.get(parsed.abbreviation()).copied()
    }

    /// First category whose keywords occur in the name, else `Other`
    #[must_use]
    pub fn categorize(&self, name: &str) -> ShoppingCategory {
        let lowered = name.to_lowercase();
        self.tables
            .categories
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map_or(ShoppingCategory::Other, |(category, _)| *category)
    }

    /// One entry per ingredient line, before consolidation
    #[must_use]
    pub fn entries(&self, record: &RecipeRecord) -> Vec<ShoppingEntry> {
        record
            .ingredients
            .iter()
            .map(|line| {
                let parsed = self.parse_line(line);
                let normalized =
                    self.normalize_quantity(parsed.quantity, parsed.unit.as_deref(), &parsed.name);
                ShoppingEntry {
                    category: self.categorize(&parsed.name),
                    name: parsed.name,
                    quantity: normalized.quantity,
                    unit: parsed.unit,
                    note: normalized.note,
                }
            })
            .collect()
    }

    /// Build the grouped and rendered shopping list for a scaled recipe
    #[must_use]
    pub fn build(&self, record: &RecipeRecord) -> ShoppingList {
        let entries = self.entries(record);
        let total = entries.len();

        let mut seen = HashSet::new();
        let unique: Vec<ShoppingEntry> = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.name.clone()))
            .collect();

        let categories: Vec<CategoryGroup> = ShoppingCategory::DISPLAY_ORDER
            .iter()
            .filter_map(|category| {
                let entries: Vec<ShoppingEntry> = unique
                    .iter()
                    .filter(|entry| entry.category == *category)
                    .cloned()
                    .collect();
                (!entries.is_empty()).then_some(CategoryGroup {
                    category: *category,
                    entries,
                })
            })
            .collect();

        debug!(
            recipe = %record.name,
            lines = total,
            entries = unique.len(),
            categories = categories.len(),
            "Built shopping list"
        );

        let formatted_text = render(&record.name, record.servings, &categories);
        ShoppingList {
            recipe_name: record.name.clone(),
            servings: record.servings,
            categories,
            formatted_text,
        }
    }

    /// Decode a recipe argument and build its list.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::MalformedInput`] when the argument is not a
    /// recipe.
    pub fn build_from_value(&self, value: &Value) -> Result<ShoppingList, PlannerError> {
        let record = RecipeRecord::from_tool_value(value)?;
        Ok(self.build(&record))
    }
}

/// Render one header per non-empty category followed by its entries
fn render(recipe_name: &str, servings: i64, categories: &[CategoryGroup]) -> String {
    let mut text = format!("Shopping list for {recipe_name} ({servings} servings)\n");
    for group in categories {
        let _ = writeln!(text, "{}:", group.category);
        for entry in &group.entries {
            let _ = writeln!(text, "{}", render_entry(entry));
        }
    }
    text
}

fn render_entry(entry: &ShoppingEntry) -> String {
    let item = entry
        .unit
        .as_ref()
        .map_or_else(|| entry.name.clone(), |unit| format!("{unit} {}", entry.name));
    let mut line = if entry.quantity.is_to_taste() {
        format!("- {item} (to taste)")
    } else {
        format!("- {} {item}", entry.quantity)
    };
    if let Some(note) = &entry.note {
        let _ = write!(line, " ({note})");
    }
    line
}

fn skip_parenthetical(text: &str) -> &str {
    if text.starts_with('(') {
        if let Some(close) = text.find(')') {
            return text[close + 1..].trim_start();
        }
    }
    text
}

/// Split a leading unit token off, returning its canonical form
fn split_unit(text: &str) -> (Option<String>, &str) {
    let token_end = text.find(char::is_whitespace).unwrap_or(text.len());
    let token = text[..token_end].trim_end_matches([',', ';', ':']);
    canonical_unit(token).map_or((None, text), |unit| (Some(unit), text[token_end..].trim_start()))
}

/// Lowercased name without preparation notes, a leading "of", or "to taste"
fn canonical_name(text: &str) -> Option<String> {
    let head = text.split(',').next().unwrap_or(text);
    let lowered = head.to_lowercase();
    let mut name = lowered.trim();
    name = name.strip_prefix("of ").unwrap_or(name).trim();
    name = name
        .strip_suffix("to taste")
        .map_or(name, str::trim_end)
        .trim_end_matches(['.', ';', ':']);
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_count_word_and_parenthetical() {
        let tables = RecipeTables::default();
        let parsed = ShoppingListBuilder::new(&tables).parse_line("1 (15 oz) can black beans, drained");
        assert_eq!(parsed.quantity, Quantity::Amount(1.0));
        assert_eq!(parsed.unit.as_deref(), Some("can"));
        assert_eq!(parsed.name, "black beans");
    }

    #[test]
    fn test_parse_line_to_taste() {
        let tables = RecipeTables::default();
        let parsed = ShoppingListBuilder::new(&tables).parse_line("Salt and pepper to taste");
        assert_eq!(parsed.quantity, Quantity::ToTaste);
        assert_eq!(parsed.unit, None);
        assert_eq!(parsed.name, "salt and pepper");
    }

    #[test]
    fn test_countable_rule_wins_over_volume() {
        let tables = RecipeTables::default();
        let builder = ShoppingListBuilder::new(&tables);
        let eggs = builder.normalize_quantity(Quantity::Amount(2.0), None, "eggs");
        assert_eq!(eggs.quantity, Quantity::Amount(6.0));
        assert_eq!(eggs.note.as_deref(), Some(STORE_MINIMUM_NOTE));

        let onions = builder.normalize_quantity(Quantity::Amount(2.0), None, "onion");
        assert_eq!(onions.quantity, Quantity::Amount(2.0));
        assert_eq!(onions.note, None);
    }

    #[test]
    fn test_volume_and_weight_minimums() {
        let tables = RecipeTables::default();
        let builder = ShoppingListBuilder::new(&tables);
        let milk = builder.normalize_quantity(Quantity::Amount(0.5), Some("cup"), "milk");
        assert_eq!(milk.quantity, Quantity::Amount(1.0));
        let flour = builder.normalize_quantity(Quantity::Amount(50.0), Some("g"), "flour");
        assert_eq!(flour.quantity, Quantity::Amount(100.0));
        let garlic = builder.normalize_quantity(Quantity::Amount(0.5), Some("cloves"), "garlic");
        assert_eq!(garlic.quantity, Quantity::Amount(0.5));
        assert_eq!(garlic.note, None);
    }

    #[test]
    fn test_piece_counts_round_up_to_whole_items() {
        let tables = RecipeTables::default();
        let builder = ShoppingListBuilder::new(&tables);
        let ginger = builder.normalize_quantity(Quantity::Amount(1.5), Some("pc"), "ginger root");
        assert_eq!(ginger.quantity, Quantity::Amount(2.0));
        assert_eq!(ginger.note.as_deref(), Some(STORE_MINIMUM_NOTE));

        let whole =
            builder.normalize_quantity(Quantity::Amount(3.0), Some("pieces"), "ginger root");
        assert_eq!(whole.quantity, Quantity::Amount(3.0));
        assert_eq!(whole.note, None);
    }

    #[test]
    fn test_eggplant_is_not_an_egg() {
        let tables = RecipeTables::default();
        let builder = ShoppingListBuilder::new(&tables);
        let eggplant = builder.normalize_quantity(Quantity::Amount(1.0), None, "eggplant");
        assert_eq!(eggplant.quantity, Quantity::Amount(1.0));
        assert_eq!(eggplant.note, None);
        assert_eq!(builder.categorize("eggplant"), ShoppingCategory::Produce);
        assert_eq!(builder.categorize("eggs"), ShoppingCategory::Proteins);
    }

    #[test]
    fn test_to_taste_entry_keeps_its_count_word() {
        let entry = ShoppingEntry {
            category: ShoppingCategory::Pantry,
            name: "salt".to_owned(),
            quantity: Quantity::ToTaste,
            unit: Some("pinch".to_owned()),
            note: None,
        };
        assert!(entry.quantity.is_to_taste());
        assert_eq!(render_entry(&entry), "- pinch salt (to taste)");
    }

    #[test]
    fn test_categorize_defaults_to_other() {
        let tables = RecipeTables::default();
        let builder = ShoppingListBuilder::new(&tables);
        assert_eq!(builder.categorize("Roma Tomatoes"), ShoppingCategory::Produce);
        assert_eq!(builder.categorize("cheddar cheese"), ShoppingCategory::Dairy);
        assert_eq!(builder.categorize("xanthan gum"), ShoppingCategory::Other);
    }
}
