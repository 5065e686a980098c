use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current timestamp in the local timezone
pub fn local_timestamp_now() -> DateTime<Local> {
    Local::now()
}

/// Measurement unit for an ingredient amount
///
/// Uses lowercase naming to match the serialized form and the unit labels
/// shown by the presentation layer.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    cup,
    tbsp,
    tsp,
    oz,
    lb,
    g,
    ml,
    /// Countable items (eggs, lemons, ...)
    piece,
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cup" => Ok(Unit::cup),
            "tbsp" => Ok(Unit::tbsp),
            "tsp" => Ok(Unit::tsp),
            "oz" => Ok(Unit::oz),
            "lb" => Ok(Unit::lb),
            "g" => Ok(Unit::g),
            "ml" => Ok(Unit::ml),
            "piece" => Ok(Unit::piece),
            _ => Err(format!(
                "Invalid unit '{}'. Valid options are: cup, tbsp, tsp, oz, lb, g, ml, piece",
                s
            )),
        }
    }
}

/// Recipe category
///
/// The category set is fixed; `Category::ALL` gives the display order used
/// by the presentation layer's category picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Breakfast" => Ok(Category::Breakfast),
            "Lunch" => Ok(Category::Lunch),
            "Dinner" => Ok(Category::Dinner),
            "Dessert" => Ok(Category::Dessert),
            "Snack" => Ok(Category::Snack),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: Breakfast, Lunch, Dinner, Dessert, Snack",
                s
            )),
        }
    }
}

/// A single ingredient line within a recipe
///
/// Ingredients are owned exclusively by their recipe and never shared; the
/// id only needs to be unique within that recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Identifier unique within the owning recipe (e.g., "ing-3")
    pub id: String,
    /// Ingredient name as displayed (e.g., "All-purpose flour")
    pub name: String,
    /// Quantity in the given unit
    pub amount: f64,
    /// Measurement unit
    pub unit: Unit,
}

/// A recipe in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier across the recipe collection (e.g., "recipe-7")
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Short description shown on the card
    pub description: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cook_time: u32,
    /// Number of servings
    pub servings: u32,
    /// Category from the fixed set
    pub category: Category,
    /// Image URL
    pub image: String,
    /// Whether the recipe is marked as a favorite
    pub favorite: bool,
    /// When the recipe was added; assigned once at creation, never updated
    pub created_at: DateTime<Local>,
    /// Instruction steps, order preserved as entered
    pub instructions: Vec<String>,
    /// Ingredient lines, order preserved as entered
    ///
    /// Declared after the scalar fields so the TOML form keeps its values
    /// ahead of the ingredient tables.
    pub ingredients: Vec<Ingredient>,
}

/// Caller-supplied ingredient payload, lacking the store-assigned id
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

/// Caller-supplied recipe payload, lacking id and creation timestamp
///
/// Numeric fields are expected to already be parsed and validated by the
/// presentation layer before the draft reaches the store.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<IngredientDraft>,
    pub instructions: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub category: Category,
    pub image: String,
    pub favorite: bool,
}

/// Field-level update for an existing recipe
///
/// Each `Some` field replaces the corresponding recipe field; `None` leaves
/// it untouched. There is deliberately no way to express an id or
/// `created_at` change through a patch.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replacement ingredient list; the store re-assigns within-recipe ids
    pub ingredients: Option<Vec<IngredientDraft>>,
    pub instructions: Option<Vec<String>>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub category: Option<Category>,
    pub image: Option<String>,
    pub favorite: Option<bool>,
}

impl Recipe {
    /// Apply a patch to this recipe
    ///
    /// Only the fields present in the patch are replaced. The recipe's id
    /// and creation timestamp are not reachable from a patch.
    pub fn apply_patch(&mut self, patch: RecipePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(drafts) = patch.ingredients {
            self.ingredients = assign_ingredient_ids(drafts);
        }
        if let Some(instructions) = patch.instructions {
            self.instructions = instructions;
        }
        if let Some(prep_time) = patch.prep_time {
            self.prep_time = prep_time;
        }
        if let Some(cook_time) = patch.cook_time {
            self.cook_time = cook_time;
        }
        if let Some(servings) = patch.servings {
            self.servings = servings;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = favorite;
        }
    }
}

/// Materialize ingredient drafts, assigning within-recipe ids
///
/// Ids are positional ("ing-1", "ing-2", ...) and only unique within the
/// owning recipe, which is all the data model requires.
pub(crate) fn assign_ingredient_ids(drafts: Vec<IngredientDraft>) -> Vec<Ingredient> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, draft)| Ingredient {
            id: format!("ing-{}", i + 1),
            name: draft.name,
            amount: draft.amount,
            unit: draft.unit,
        })
        .collect()
}
