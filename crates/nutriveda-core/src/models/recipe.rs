//! Recipe models.

use serde::{Deserialize, Serialize};

use super::food::AyurvedicProperties;

/// One ingredient line in a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    /// Ingredient name
    pub name: String,
    /// Quantity in the given unit
    pub quantity: f64,
    /// Unit (e.g., "cup", "tsp", "g")
    pub unit: String,
    /// Optional catalog food id when the ingredient maps to a known food
    pub food_id: Option<String>,
}

/// A recipe: ingredients, timing, and the same Ayurvedic property block
/// foods carry, so it participates in the same dosha filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Group key analogous to a food's category (e.g., "Indian")
    pub cuisine: String,
    /// Preparation time in minutes
    pub prep_time_min: u32,
    /// Cooking time in minutes
    pub cook_time_min: u32,
    /// Number of servings produced
    pub servings: u32,
    /// Ingredient list, display order preserved
    pub ingredients: Vec<RecipeIngredient>,
    /// Ordered preparation steps
    pub instructions: Vec<String>,
    /// Ayurvedic property block
    pub ayurvedic_properties: AyurvedicProperties,
    /// Health benefit notes, searched by the text filter
    pub benefits: Vec<String>,
}

impl Recipe {
    /// Total hands-on time in minutes.
    pub fn total_time_min(&self) -> u32 {
        self.prep_time_min + self.cook_time_min
    }
}
