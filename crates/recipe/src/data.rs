use serde::{Deserialize, Serialize};

use crate::{Recipe, RecipeError};

/// Recipe as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeData {
    pub id: String,
    pub name: String,
    pub category: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: i64,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl RecipeData {
    pub fn from_record(recipe: Recipe) -> Result<Self, RecipeError> {
        let ingredients = recipe.ingredient_list()?;

        Ok(Self {
            created_at: mealbook_shared::unix_to_rfc3339(recipe.created_at)?,
            updated_at: mealbook_shared::unix_to_rfc3339(recipe.updated_at)?,
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            ingredients,
            instructions: recipe.instructions,
            image_url: recipe.image_url,
        })
    }
}
