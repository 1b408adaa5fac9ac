use axum::Router;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::routing::{delete, get};
use mealbook_shared::Store;

use crate::config::Config;
use crate::error::ApiError;

pub mod assets;
pub mod health;
pub mod meal_plans;
pub mod recipes;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Store,
}

/// `axum::Json` with the rejection mapped onto [`ApiError`], so malformed
/// or missing request bodies come back as a 400 `{"message"}` payload
/// instead of axum's default 422.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

pub fn router(state: AppState) -> Router {
    let router = Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/api/recipes/{id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route(
            "/api/meal-plans",
            get(meal_plans::list_meal_plans).post(meal_plans::create_meal_plan),
        )
        .route("/api/meal-plans/{id}", delete(meal_plans::delete_meal_plan));

    // In production the server also hosts the built frontend: embedded
    // assets are served by path and any unmatched route falls through to
    // index.html so client side routing survives a page reload.
    let router = if state.config.is_production() {
        router.fallback_service(assets::AssetsService::new())
    } else {
        router.fallback(fallback)
    };

    router.with_state(state)
}

async fn fallback() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
