use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecipeError {
    #[error("Recipe not found")]
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

impl From<validator::ValidationErrors> for RecipeError {
    fn from(errors: validator::ValidationErrors) -> Self {
        RecipeError::Validation(errors.to_string())
    }
}
