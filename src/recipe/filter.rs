//! Derived-view filtering for the recipe catalog
//!
//! These are pure consumer-side projections: the presentation layer calls
//! them on every render with the store's current collection and the current
//! filter inputs. Nothing here is cached or persisted.

use super::model::{Category, Recipe};

/// Filter inputs held by the presentation layer
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-insensitive search text matched against title and description
    pub search: String,
    /// Selected category; `None` means any category
    pub category: Option<Category>,
    /// Show only favorites when set
    pub favorites_only: bool,
}

impl RecipeFilter {
    /// An empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }
}

/// Apply search filtering (case-insensitive, title and description)
pub fn apply_search_filter(recipes: &mut Vec<&Recipe>, search: &str) {
    let search_lower = search.to_lowercase();
    recipes.retain(|recipe| {
        recipe.title.to_lowercase().contains(&search_lower)
            || recipe.description.to_lowercase().contains(&search_lower)
    });
}

/// Apply category filtering
pub fn apply_category_filter(recipes: &mut Vec<&Recipe>, category: Category) {
    recipes.retain(|recipe| recipe.category == category);
}

/// Apply favorites-only filtering
pub fn apply_favorite_filter(recipes: &mut Vec<&Recipe>) {
    recipes.retain(|recipe| recipe.favorite);
}

/// Compute the filtered view of a recipe collection
///
/// A recipe is kept when its title or description contains the search text
/// (case-insensitively), its category matches the selected one (or no
/// category is selected), and it is a favorite when the favorites flag is
/// on. Collection order is preserved; an empty filter returns the full
/// collection unchanged.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], filter: &RecipeFilter) -> Vec<&'a Recipe> {
    let mut result: Vec<&Recipe> = recipes.iter().collect();

    if !filter.search.is_empty() {
        apply_search_filter(&mut result, &filter.search);
    }
    if let Some(category) = filter.category {
        apply_category_filter(&mut result, category);
    }
    if filter.favorites_only {
        apply_favorite_filter(&mut result);
    }

    result
}
