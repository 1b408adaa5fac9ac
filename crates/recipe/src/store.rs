use std::ops::Deref;

use mealbook_db::table::{MealPlans, Recipes};
use mealbook_shared::{Store, now_unix};
use sea_query::{Expr, ExprTrait, LikeExpr, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use ulid::Ulid;

use crate::{CreateRecipe, RecipeError, UpdateRecipe};

/// Recipe row as stored. `ingredients` holds a JSON array of strings.
#[derive(Debug, Clone, Default, FromRow)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: i64,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Recipe {
    pub fn ingredient_list(&self) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(&self.ingredients)
    }
}

/// Optional list filters, straight from the query string. A `category` of
/// `all` and an empty `search` both mean "no filter".
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct RecipeStore(pub Store);

impl Deref for RecipeStore {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn columns() -> [Recipes; 11] {
    [
        Recipes::Id,
        Recipes::Name,
        Recipes::Category,
        Recipes::PrepTime,
        Recipes::CookTime,
        Recipes::Servings,
        Recipes::Ingredients,
        Recipes::Instructions,
        Recipes::ImageUrl,
        Recipes::CreatedAt,
        Recipes::UpdatedAt,
    ]
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl RecipeStore {
    /// List recipes, newest first.
    pub async fn list(&self, filter: RecipeFilter) -> Result<Vec<Recipe>, RecipeError> {
        let mut statement = Query::select()
            .columns(columns())
            .from(Recipes::Table)
            .order_by(Recipes::CreatedAt, Order::Desc)
            .order_by(Recipes::Id, Order::Desc)
            .to_owned();

        if let Some(category) = filter.category.filter(|c| !c.is_empty() && c != "all") {
            statement.and_where(Expr::col(Recipes::Category).eq(category));
        }

        if let Some(search) = filter.search.filter(|s| !s.is_empty()) {
            // SQLite LIKE is case-insensitive for ASCII, which gives us
            // the case-insensitive substring match for free.
            let pattern = format!("%{}%", escape_like(&search));
            statement.and_where(
                Expr::col(Recipes::Name).like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Recipe, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> Result<Option<Recipe>, RecipeError> {
        let statement = Query::select()
            .columns(columns())
            .from(Recipes::Table)
            .and_where(Expr::col(Recipes::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Recipe, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<Recipe, RecipeError> {
        self.find(id).await?.ok_or(RecipeError::NotFound)
    }

    pub async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Recipe>, RecipeError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns(columns())
            .from(Recipes::Table)
            .and_where(Expr::col(Recipes::Id).is_in(ids.iter().cloned()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Recipe, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn create(&self, input: CreateRecipe) -> Result<Recipe, RecipeError> {
        validator::Validate::validate(&input)?;

        let id = Ulid::new().to_string();
        let now = now_unix();
        let ingredients = serde_json::to_string(&input.ingredients)?;

        let statement = Query::insert()
            .into_table(Recipes::Table)
            .columns(columns())
            .values_panic([
                id.clone().into(),
                input.name.into(),
                input.category.into(),
                input.prep_time.into(),
                input.cook_time.into(),
                input.servings.into(),
                ingredients.into(),
                input.instructions.into(),
                input.image_url.unwrap_or_default().into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::debug!(recipe_id = %id, "recipe created");

        self.get(id).await
    }

    /// Merge the supplied fields over the stored row. `updated_at` is
    /// refreshed on every successful update.
    pub async fn update(&self, id: impl Into<String>, input: UpdateRecipe) -> Result<Recipe, RecipeError> {
        validator::Validate::validate(&input)?;

        let id = id.into();
        let mut statement = Query::update()
            .table(Recipes::Table)
            .value(Recipes::UpdatedAt, now_unix())
            .and_where(Expr::col(Recipes::Id).eq(id.clone()))
            .to_owned();

        if let Some(name) = input.name {
            statement.value(Recipes::Name, name);
        }
        if let Some(category) = input.category {
            statement.value(Recipes::Category, category);
        }
        if let Some(prep_time) = input.prep_time {
            statement.value(Recipes::PrepTime, prep_time);
        }
        if let Some(cook_time) = input.cook_time {
            statement.value(Recipes::CookTime, cook_time);
        }
        if let Some(servings) = input.servings {
            statement.value(Recipes::Servings, servings);
        }
        if let Some(ingredients) = input.ingredients {
            statement.value(Recipes::Ingredients, serde_json::to_string(&ingredients)?);
        }
        if let Some(instructions) = input.instructions {
            statement.value(Recipes::Instructions, instructions);
        }
        if let Some(image_url) = input.image_url {
            statement.value(Recipes::ImageUrl, image_url);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RecipeError::NotFound);
        }

        self.get(id).await
    }

    /// Delete the recipe and every meal plan referencing it, in one
    /// transaction, so a crash can never leave orphaned plans behind.
    pub async fn delete(&self, id: impl Into<String>) -> Result<u64, RecipeError> {
        let id = id.into();
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = Query::delete()
            .from_table(Recipes::Table)
            .and_where(Expr::col(Recipes::Id).eq(id.clone()))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        let deleted = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(RecipeError::NotFound);
        }

        let (sql, values) = Query::delete()
            .from_table(MealPlans::Table)
            .and_where(Expr::col(MealPlans::RecipeId).eq(id.clone()))
            .to_owned()
            .build_sqlx(SqliteQueryBuilder);

        let plans_removed = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        tracing::debug!(recipe_id = %id, plans_removed, "recipe deleted with cascade");

        Ok(plans_removed)
    }
}
