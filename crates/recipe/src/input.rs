use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::RecipeCategory;

fn validate_category(category: &str) -> Result<(), validator::ValidationError> {
    if category.parse::<RecipeCategory>().is_ok() {
        return Ok(());
    }

    let mut error = validator::ValidationError::new("invalid_category");
    error.message = Some(std::borrow::Cow::from(
        "Category must be 'breakfast', 'lunch', 'dinner', 'snack' or 'dessert'",
    ));
    Err(error)
}

/// Payload for `POST /api/recipes`. Field names follow the wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipe {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_category"))]
    pub category: String,

    #[validate(length(min = 1, message = "prepTime is required"))]
    pub prep_time: String,

    #[validate(length(min = 1, message = "cookTime is required"))]
    pub cook_time: String,

    #[validate(range(min = 1, message = "servings must be a positive integer"))]
    pub servings: i64,

    #[validate(length(min = 1, message = "at least 1 ingredient is required"))]
    pub ingredients: Vec<String>,

    #[validate(length(min = 1, message = "instructions is required"))]
    pub instructions: String,

    #[serde(default)]
    pub image_url: Option<String>,
}

/// Payload for `PUT /api/recipes/{id}`: any subset of the creatable fields.
/// Supplied fields are validated and merged over the stored document;
/// omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipe {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_category"))]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "prepTime is required"))]
    pub prep_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "cookTime is required"))]
    pub cook_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "servings must be a positive integer"))]
    pub servings: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "at least 1 ingredient is required"))]
    pub ingredients: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "instructions is required"))]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
