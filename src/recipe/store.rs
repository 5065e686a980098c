use super::model::{
    Category, IngredientDraft, Recipe, RecipeDraft, RecipePatch, Unit, assign_ingredient_ids,
    local_timestamp_now,
};
use crate::id::counter_from_ids;
use crate::subscribe::{SubscriberId, Subscribers};
use serde::{Deserialize, Serialize};

/// State container for the recipe catalog
///
/// Vec is used as the primary storage: it preserves the most-recent-first
/// display order directly, iteration order is predictable for rendering,
/// and the ownership model stays simple at catalog scales (tens to a few
/// hundred recipes). Lookups by id are linear scans, which is the same
/// trade the rest of the crate makes.
///
/// Every mutating operation notifies subscribers, but only after the
/// collection change has fully landed.
pub struct RecipeStore {
    recipes: Vec<Recipe>,
    /// Counter for generating unique recipe ids
    recipe_counter: u32,
    subscribers: Subscribers,
}

/// Serializable snapshot of a `RecipeStore`
///
/// Carries the id counter alongside the collection so that ids stay fresh
/// after a restore.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecipeSnapshot {
    pub recipe_counter: u32,
    pub recipes: Vec<Recipe>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        Self {
            recipes: Vec::new(),
            recipe_counter: 0,
            subscribers: Subscribers::new(),
        }
    }
}

impl RecipeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an injected initial collection
    ///
    /// The id counter is derived from the highest numeric id already in the
    /// collection, so subsequent `add_recipe` calls still produce fresh ids.
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let recipe_counter = counter_from_ids(recipes.iter().map(|r| r.id.as_str()), "recipe-");
        Self {
            recipes,
            recipe_counter,
            subscribers: Subscribers::new(),
        }
    }

    /// Create a store seeded with the sample catalog
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        store.add_recipe(sample_pancake_draft());
        store
    }

    /// Rebuild a store from a snapshot
    pub fn from_snapshot(snapshot: RecipeSnapshot) -> Self {
        Self {
            recipes: snapshot.recipes,
            recipe_counter: snapshot.recipe_counter,
            subscribers: Subscribers::new(),
        }
    }

    /// Take a serializable snapshot of the current state
    pub fn snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot {
            recipe_counter: self.recipe_counter,
            recipes: self.recipes.clone(),
        }
    }

    /// Generate a new unique recipe id
    fn generate_recipe_id(&mut self) -> String {
        self.recipe_counter += 1;
        format!("recipe-{}", self.recipe_counter)
    }

    /// Add a recipe from a draft
    ///
    /// Assigns a fresh recipe id and within-recipe ingredient ids, stamps
    /// the creation time, and prepends the recipe so the collection stays
    /// most-recent-first. The draft is taken as-is: validation happened in
    /// the presentation layer.
    ///
    /// # Returns
    /// The id assigned to the new recipe
    pub fn add_recipe(&mut self, draft: RecipeDraft) -> String {
        let id = self.generate_recipe_id();
        let recipe = Recipe {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            ingredients: assign_ingredient_ids(draft.ingredients),
            instructions: draft.instructions,
            prep_time: draft.prep_time,
            cook_time: draft.cook_time,
            servings: draft.servings,
            category: draft.category,
            image: draft.image,
            favorite: draft.favorite,
            created_at: local_timestamp_now(),
        };
        self.recipes.insert(0, recipe);
        self.subscribers.notify();
        id
    }

    /// Remove a recipe by id
    ///
    /// # Returns
    /// True if a recipe was removed; false (and no notification) if the id
    /// was not found
    pub fn remove_recipe(&mut self, id: &str) -> bool {
        if let Some(pos) = self.recipes.iter().position(|r| r.id == id) {
            self.recipes.remove(pos);
            self.subscribers.notify();
            true
        } else {
            false
        }
    }

    /// Flip the favorite flag on a recipe
    ///
    /// # Returns
    /// True if the recipe was found; false (and no notification) otherwise
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            recipe.favorite = !recipe.favorite;
            self.subscribers.notify();
            true
        } else {
            false
        }
    }

    /// Merge a patch into an existing recipe
    ///
    /// The recipe's id and creation timestamp are preserved regardless of
    /// the patch contents.
    ///
    /// # Returns
    /// True if the recipe was found; false (and no notification) otherwise
    pub fn update_recipe(&mut self, id: &str, patch: RecipePatch) -> bool {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            recipe.apply_patch(patch);
            self.subscribers.notify();
            true
        } else {
            false
        }
    }

    /// The full recipe collection, most-recent-first
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Find a recipe by id
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Number of recipes in the catalog
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// The fixed category list, in display order
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriberId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

/// The seeded sample recipe shipped with the catalog
fn sample_pancake_draft() -> RecipeDraft {
    RecipeDraft {
        title: "Classic Pancakes".to_string(),
        description: "Fluffy and delicious homemade pancakes perfect for breakfast".to_string(),
        ingredients: vec![
            ingredient("All-purpose flour", 1.5, Unit::cup),
            ingredient("Baking powder", 3.5, Unit::tsp),
            ingredient("Salt", 0.25, Unit::tsp),
            ingredient("Sugar", 1.0, Unit::tbsp),
            ingredient("Milk", 1.25, Unit::cup),
            ingredient("Egg", 1.0, Unit::piece),
            ingredient("Melted butter", 3.0, Unit::tbsp),
        ],
        instructions: vec![
            "In a large bowl, whisk together flour, baking powder, salt, and sugar".to_string(),
            "In another bowl, whisk together milk, egg, and melted butter".to_string(),
            "Pour wet ingredients into dry ingredients and whisk until just combined".to_string(),
            "Heat a griddle or pan over medium heat".to_string(),
            "Pour 1/4 cup batter for each pancake".to_string(),
            "Cook until bubbles form on surface, then flip and cook other side".to_string(),
        ],
        prep_time: 10,
        cook_time: 15,
        servings: 4,
        category: Category::Breakfast,
        image: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?auto=format&fit=crop&w=800&q=80"
            .to_string(),
        favorite: true,
    }
}

fn ingredient(name: &str, amount: f64, unit: Unit) -> IngredientDraft {
    IngredientDraft {
        name: name.to_string(),
        amount,
        unit,
    }
}
