use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use mealbook_mealplan::{CreateMealPlan, MealPlanData, MealPlanFilter, MealPlanStore};
use serde::Deserialize;
use serde_json::json;

use super::{ApiJson, AppState};
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MealPlanListQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/meal-plans - List meal plans with their recipes joined in,
/// ordered by date. The range filter applies only when both `startDate`
/// and `endDate` are present and non empty; bounds are inclusive and may
/// carry a time component, which is dropped.
#[tracing::instrument(skip(state))]
pub async fn list_meal_plans(
    State(state): State<AppState>,
    Query(query): Query<MealPlanListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let plans = MealPlanStore(state.store.clone())
        .list(MealPlanFilter {
            start_date: query.start_date,
            end_date: query.end_date,
        })
        .await?;

    let data = plans
        .into_iter()
        .map(MealPlanData::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(data))
}

/// POST /api/meal-plans - Schedule a recipe for a date and meal slot
#[tracing::instrument(skip(state, input))]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateMealPlan>,
) -> Result<impl IntoResponse, ApiError> {
    let plan = MealPlanStore(state.store.clone()).create(input).await?;
    tracing::info!(meal_plan_id = %plan.plan.id, "meal plan created");

    Ok((StatusCode::CREATED, Json(MealPlanData::from_record(plan)?)))
}

/// DELETE /api/meal-plans/{id} - Remove a single planned meal
#[tracing::instrument(skip(state))]
pub async fn delete_meal_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    MealPlanStore(state.store.clone()).delete(id.as_str()).await?;
    tracing::info!(meal_plan_id = %id, "meal plan deleted");

    Ok(Json(json!({"message": "Meal plan deleted successfully"})))
}
