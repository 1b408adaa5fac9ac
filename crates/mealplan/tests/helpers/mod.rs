use std::{path::PathBuf, str::FromStr};

use mealbook_recipe::{CreateRecipe, Recipe, RecipeStore};
use mealbook_shared::Store;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_store(path: PathBuf) -> anyhow::Result<Store> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mealbook_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(Store::single(pool))
}

pub async fn seed_recipe(store: &Store, name: &str) -> anyhow::Result<Recipe> {
    let recipe = RecipeStore(store.clone())
        .create(CreateRecipe {
            name: name.to_string(),
            category: "dinner".to_string(),
            prep_time: "10 min".to_string(),
            cook_time: "20 min".to_string(),
            servings: 2,
            ingredients: vec!["milk".to_string(), "flour".to_string()],
            instructions: "Mix everything.".to_string(),
            image_url: None,
        })
        .await?;

    Ok(recipe)
}
