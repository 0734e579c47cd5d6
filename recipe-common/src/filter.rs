//! Live search filter over the held record set

use crate::model::Recipe;

/// Select recipes whose name or category contains `query`
///
/// Matching is case-insensitive and Unicode-aware. The empty query keeps
/// every record. Input order is preserved.
pub fn filter_recipes<'a>(records: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|recipe| matches_lowercase(recipe, &needle))
        .collect()
}

/// Whether a single recipe matches `query` (case-insensitive)
pub fn matches_query(recipe: &Recipe, query: &str) -> bool {
    matches_lowercase(recipe, &query.to_lowercase())
}

fn matches_lowercase(recipe: &Recipe, needle: &str) -> bool {
    recipe.name.to_lowercase().contains(needle) || recipe.category.to_lowercase().contains(needle)
}
