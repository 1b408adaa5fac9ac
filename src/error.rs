use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mealbook_mealplan::MealPlanError;
use mealbook_recipe::RecipeError;
use serde::Serialize;
use thiserror::Error;

/// Wire shape of every error the API returns.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<RecipeError> for ApiError {
    fn from(err: RecipeError) -> Self {
        match err {
            RecipeError::NotFound => ApiError::NotFound("Recipe not found".to_string()),
            RecipeError::Validation(message) => ApiError::Validation(message),
            RecipeError::Database(err) => ApiError::Database(err),
            RecipeError::Serialization(err) => ApiError::Internal(err.to_string()),
            RecipeError::Timestamp(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<MealPlanError> for ApiError {
    fn from(err: MealPlanError) -> Self {
        match err {
            MealPlanError::NotFound => ApiError::NotFound("Meal plan not found".to_string()),
            MealPlanError::Validation(message) => ApiError::Validation(message),
            MealPlanError::Database(err) => ApiError::Database(err),
            MealPlanError::Serialization(err) => ApiError::Internal(err.to_string()),
            MealPlanError::Timestamp(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Database(err) => {
                tracing::error!(error = ?err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
