//! Recipe catalog domain
//!
//! Split into submodules following the crate layout:
//! - `model`: entity shapes (Recipe, Ingredient) and their fixed enums
//! - `store`: the `RecipeStore` state container
//! - `filter`: pure derived-view filtering consumed by the presentation layer

mod filter;
mod model;
mod store;

pub use filter::{
    RecipeFilter, apply_category_filter, apply_favorite_filter, apply_search_filter,
    filter_recipes,
};
pub use model::{
    Category, Ingredient, IngredientDraft, Recipe, RecipeDraft, RecipePatch, Unit,
    local_timestamp_now,
};
pub use store::{RecipeSnapshot, RecipeStore};
