#![allow(dead_code)]

use axum::Router;
use mealbook::config::{Config, DatabaseConfig, ObservabilityConfig, ServerConfig};
use mealbook::routes::AppState;
use mealbook_shared::Store;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    mealbook_db::migrator::<sqlx::Sqlite>()
        .unwrap()
        .run(&mut conn, &Plan::apply_all())
        .await
        .unwrap();
    drop(conn);

    pool
}

pub fn test_config(environment: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        observability: ObservabilityConfig {
            log_level: "info".to_string(),
        },
        environment: environment.to_string(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Store,
}

pub async fn create_test_app() -> TestApp {
    let pool = setup_test_db().await;
    let store = Store::single(pool);

    let state = AppState {
        config: test_config("development"),
        store: store.clone(),
    };

    TestApp {
        router: mealbook::routes::router(state),
        store,
    }
}
