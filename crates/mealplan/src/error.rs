use mealbook_recipe::RecipeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealPlanError {
    #[error("Meal plan not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Timestamp(#[from] time::Error),
}

impl From<RecipeError> for MealPlanError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::NotFound => {
                MealPlanError::Validation("Referenced recipe does not exist".to_string())
            }
            RecipeError::Validation(message) => MealPlanError::Validation(message),
            RecipeError::Database(err) => MealPlanError::Database(err),
            RecipeError::Serialization(err) => MealPlanError::Serialization(err),
            RecipeError::Timestamp(err) => MealPlanError::Timestamp(err),
        }
    }
}
