use axum::{Json, extract::State};
use serde::Serialize;

use super::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
}

/// GET /api/health - Liveness probe
/// Reports the configured environment and the server's current time
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let timestamp = mealbook_shared::unix_to_rfc3339(mealbook_shared::now_unix())
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(Json(HealthResponse {
        message: "Recipe Planner API is running!".to_string(),
        timestamp,
        environment: state.config.environment.clone(),
    }))
}
