use std::collections::HashMap;
use std::ops::Deref;

use mealbook_db::table::MealPlans;
use mealbook_recipe::{Recipe, RecipeStore};
use mealbook_shared::{Store, now_unix};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use ulid::Ulid;

use crate::{CreateMealPlan, MealPlanError, MealType, PlanDate};

/// Meal-plan row as stored.
#[derive(Debug, Clone, Default, FromRow)]
pub struct MealPlan {
    pub id: String,
    pub date: String,
    pub meal_type: String,
    pub recipe_id: String,
    pub created_at: i64,
}

/// A plan joined with its recipe. `recipe` is `None` when the referenced
/// recipe no longer exists; readers must not assume the join succeeded.
#[derive(Debug, Clone)]
pub struct MealPlanWithRecipe {
    pub plan: MealPlan,
    pub recipe: Option<Recipe>,
}

/// Date-range filter, straight from the query string. Filtering engages
/// only when both bounds are present and non-empty; a lone bound is
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct MealPlanFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Clone)]
pub struct MealPlanStore(pub Store);

impl Deref for MealPlanStore {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn columns() -> [MealPlans; 5] {
    [
        MealPlans::Id,
        MealPlans::Date,
        MealPlans::MealType,
        MealPlans::RecipeId,
        MealPlans::CreatedAt,
    ]
}

fn parse_date(value: &str) -> Result<PlanDate, MealPlanError> {
    PlanDate::parse(value).map_err(|_| {
        MealPlanError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

impl MealPlanStore {
    fn recipes(&self) -> RecipeStore {
        RecipeStore(self.0.clone())
    }

    /// List plans with their recipes joined, earliest slot first. Both
    /// range bounds are inclusive.
    pub async fn list(
        &self,
        filter: MealPlanFilter,
    ) -> Result<Vec<MealPlanWithRecipe>, MealPlanError> {
        let range = match (
            filter.start_date.filter(|s| !s.is_empty()),
            filter.end_date.filter(|s| !s.is_empty()),
        ) {
            (Some(start), Some(end)) => Some((parse_date(&start)?, parse_date(&end)?)),
            _ => None,
        };

        let mut statement = Query::select()
            .columns(columns())
            .from(MealPlans::Table)
            .order_by(MealPlans::Date, Order::Asc)
            .order_by(MealPlans::CreatedAt, Order::Asc)
            .order_by(MealPlans::Id, Order::Asc)
            .to_owned();

        if let Some((start, end)) = range {
            statement
                .and_where(Expr::col(MealPlans::Date).gte(start.to_string()))
                .and_where(Expr::col(MealPlans::Date).lte(end.to_string()));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let plans = sqlx::query_as_with::<_, MealPlan, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        self.join_recipes(plans).await
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> Result<Option<MealPlanWithRecipe>, MealPlanError> {
        let statement = Query::select()
            .columns(columns())
            .from(MealPlans::Table)
            .and_where(Expr::col(MealPlans::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let plan = sqlx::query_as_with::<_, MealPlan, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        let Some(plan) = plan else {
            return Ok(None);
        };

        let recipe = self.recipes().find(plan.recipe_id.as_str()).await?;

        Ok(Some(MealPlanWithRecipe { plan, recipe }))
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<MealPlanWithRecipe, MealPlanError> {
        self.find(id).await?.ok_or(MealPlanError::NotFound)
    }

    /// Insert a slot and return it with the recipe joined, re-read from the
    /// store. The referenced recipe must exist. Duplicate (date, meal type)
    /// slots are allowed; views show the earliest one.
    pub async fn create(
        &self,
        input: CreateMealPlan,
    ) -> Result<MealPlanWithRecipe, MealPlanError> {
        let date = parse_date(&input.date)?;

        let meal_type: MealType = input.meal_type.parse().map_err(|_| {
            MealPlanError::Validation(format!(
                "Meal type must be 'breakfast', 'lunch' or 'dinner', got '{}'",
                input.meal_type
            ))
        })?;

        if self.recipes().find(input.recipe_id.as_str()).await?.is_none() {
            return Err(MealPlanError::Validation(
                "Referenced recipe does not exist".to_string(),
            ));
        }

        let id = Ulid::new().to_string();

        let statement = Query::insert()
            .into_table(MealPlans::Table)
            .columns(columns())
            .values_panic([
                id.clone().into(),
                date.to_string().into(),
                meal_type.to_string().into(),
                input.recipe_id.into(),
                now_unix().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(plan_id = %id, date = %date, "meal plan created");

        self.get(id).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<(), MealPlanError> {
        let id = id.into();
        let (sql, values) = Query::delete()
            .from_table(MealPlans::Table)
            .and_where(Expr::col(MealPlans::Id).eq(id.clone()))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MealPlanError::NotFound);
        }

        tracing::debug!(plan_id = %id, "meal plan deleted");

        Ok(())
    }

    async fn join_recipes(
        &self,
        plans: Vec<MealPlan>,
    ) -> Result<Vec<MealPlanWithRecipe>, MealPlanError> {
        let mut ids: Vec<String> = plans.iter().map(|plan| plan.recipe_id.clone()).collect();
        ids.sort();
        ids.dedup();

        let recipes: HashMap<String, Recipe> = self
            .recipes()
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|recipe| (recipe.id.clone(), recipe))
            .collect();

        Ok(plans
            .into_iter()
            .map(|plan| {
                let recipe = recipes.get(&plan.recipe_id).cloned();
                MealPlanWithRecipe { plan, recipe }
            })
            .collect())
    }
}
