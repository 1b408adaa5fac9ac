use mealbook_mealplan::{CreateMealPlan, MealPlanData, Week};
use mealbook_recipe::{CreateRecipe, RecipeData, RecipeFilter, UpdateRecipe};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::ClientError;

/// HTTP client for the mealbook API. One request per call, no retries and
/// no request de-duplication; callers decide what a failure means for
/// their view state.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub message: String,
    pub timestamp: String,
    pub environment: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Confirmation {
    message: String,
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| status.to_string());

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<ApiClient, ClientError> {
        let client = reqwest::Client::builder().build()?;

        Ok(ApiClient {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        let response = self.client.get(self.url("/api/health")).send().await?;
        decode(response).await
    }

    pub async fn list_recipes(&self, filter: RecipeFilter) -> Result<Vec<RecipeData>, ClientError> {
        let mut request = self.client.get(self.url("/api/recipes"));

        if let Some(category) = &filter.category {
            request = request.query(&[("category", category)]);
        }
        if let Some(search) = &filter.search {
            request = request.query(&[("search", search)]);
        }

        decode(request.send().await?).await
    }

    pub async fn get_recipe(&self, id: &str) -> Result<RecipeData, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/recipes/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_recipe(&self, input: &CreateRecipe) -> Result<RecipeData, ClientError> {
        let response = self
            .client
            .post(self.url("/api/recipes"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_recipe(
        &self,
        id: &str,
        input: &UpdateRecipe,
    ) -> Result<RecipeData, ClientError> {
        let response = self
            .client
            .put(self.url(&format!("/api/recipes/{id}")))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    /// Delete a recipe. The server also removes every meal plan that
    /// referenced it.
    pub async fn delete_recipe(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/recipes/{id}")))
            .send()
            .await?;
        decode::<Confirmation>(response).await?;

        tracing::debug!(recipe_id = id, "recipe deleted");

        Ok(())
    }

    /// List plans, optionally restricted to one week (both bounds
    /// inclusive).
    pub async fn list_meal_plans(
        &self,
        week: Option<Week>,
    ) -> Result<Vec<MealPlanData>, ClientError> {
        let mut request = self.client.get(self.url("/api/meal-plans"));

        if let Some(week) = week {
            request = request.query(&[
                ("startDate", week.start.to_string()),
                ("endDate", week.end.to_string()),
            ]);
        }

        decode(request.send().await?).await
    }

    pub async fn create_meal_plan(
        &self,
        input: &CreateMealPlan,
    ) -> Result<MealPlanData, ClientError> {
        let response = self
            .client
            .post(self.url("/api/meal-plans"))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_meal_plan(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/meal-plans/{id}")))
            .send()
            .await?;
        decode::<Confirmation>(response).await?;

        tracing::debug!(plan_id = id, "meal plan deleted");

        Ok(())
    }
}
