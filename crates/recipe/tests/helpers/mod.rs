use std::{path::PathBuf, str::FromStr};

use mealbook_recipe::CreateRecipe;
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

#[allow(dead_code)]
pub fn recipe_input(name: &str, category: &str) -> CreateRecipe {
    CreateRecipe {
        name: name.to_string(),
        category: category.to_string(),
        prep_time: "10 min".to_string(),
        cook_time: "20 min".to_string(),
        servings: 2,
        ingredients: vec!["milk".to_string(), "flour".to_string()],
        instructions: "Mix everything.".to_string(),
        image_url: None,
    }
}
