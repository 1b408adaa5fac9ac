use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use mealbook_recipe::{CreateRecipe, RecipeData, RecipeFilter, RecipeStore, UpdateRecipe};
use serde::Deserialize;
use serde_json::json;

use super::{ApiJson, AppState};
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecipeListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

/// GET /api/recipes - List recipes, newest first
/// `category` narrows to one category (`all` and empty are ignored),
/// `search` matches names case insensitively
#[tracing::instrument(skip(state))]
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(query): Query<RecipeListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let recipes = RecipeStore(state.store.clone())
        .list(RecipeFilter {
            category: query.category,
            search: query.search,
        })
        .await?;

    let data = recipes
        .into_iter()
        .map(RecipeData::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(data))
}

/// GET /api/recipes/{id} - Fetch a single recipe
#[tracing::instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = RecipeStore(state.store.clone()).get(id).await?;

    Ok(Json(RecipeData::from_record(recipe)?))
}

/// POST /api/recipes - Create a recipe
#[tracing::instrument(skip(state, input))]
pub async fn create_recipe(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateRecipe>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = RecipeStore(state.store.clone()).create(input).await?;
    tracing::info!(recipe_id = %recipe.id, "recipe created");

    Ok((StatusCode::CREATED, Json(RecipeData::from_record(recipe)?)))
}

/// PUT /api/recipes/{id} - Update the supplied fields of a recipe
#[tracing::instrument(skip(state, input))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<UpdateRecipe>,
) -> Result<impl IntoResponse, ApiError> {
    let recipe = RecipeStore(state.store.clone()).update(id, input).await?;

    Ok(Json(RecipeData::from_record(recipe)?))
}

/// DELETE /api/recipes/{id} - Delete a recipe together with every meal plan
/// that references it
#[tracing::instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let plans_removed = RecipeStore(state.store.clone()).delete(id.as_str()).await?;
    tracing::info!(recipe_id = %id, plans_removed, "recipe deleted");

    Ok(Json(json!({"message": "Recipe deleted successfully"})))
}
