// ABOUTME: Priority allergen detection over ingredient text
// ABOUTME: Reports which Canadian priority allergens a recipe's ingredients mention
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::tables::RecipeTables;

/// Allergen labels whose keywords occur in any ingredient, in table order.
///
/// Matching is a case-insensitive substring test, so it errs towards
/// flagging (`peanut butter` also flags milk).
#[must_use]
pub fn flag_allergens<S: AsRef<str>>(tables: &RecipeTables, ingredients: &[S]) -> Vec<String> {
    let text = ingredients
        .iter()
        .map(|line| line.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    tables
        .allergens
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
        .map(|(label, _)| label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_in_table_order() {
        let tables = RecipeTables::default();
        let flagged = flag_allergens(
            &tables,
            &["2 Eggs", "1 cup all-purpose flour", "1 tbsp sesame oil"],
        );
        assert_eq!(flagged, vec!["eggs", "sesame", "wheat and gluten"]);
    }

    #[test]
    fn test_no_allergens() {
        let tables = RecipeTables::default();
        assert!(flag_allergens(&tables, &["1 cup rice", "2 cups water"]).is_empty());
    }
}
