use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

mod common;
use common::create_test_app;

async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();

    (status, json)
}

async fn seed_recipe(router: &Router, name: &str) -> String {
    let (status, json) = send(
        router,
        Method::POST,
        "/api/recipes",
        Some(serde_json::json!({
            "name": name,
            "category": "dinner",
            "prepTime": "10 min",
            "cookTime": "30 min",
            "servings": 4,
            "ingredients": ["chicken", "rice"],
            "instructions": "Cook it all."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["id"].as_str().unwrap().to_string()
}

async fn seed_plan(router: &Router, date: &str, meal_type: &str, recipe_id: &str) -> String {
    let (status, json) = send(
        router,
        Method::POST,
        "/api/meal-plans",
        Some(serde_json::json!({
            "date": date,
            "mealType": meal_type,
            "recipeId": recipe_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_meal_plan_returns_joined_recipe() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/api/meal-plans",
        Some(serde_json::json!({
            "date": "2025-06-16",
            "mealType": "dinner",
            "recipeId": recipe_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["date"], "2025-06-16");
    assert_eq!(json["mealType"], "dinner");
    assert_eq!(json["recipeId"], recipe_id.as_str());
    assert_eq!(json["recipe"]["name"], "Chicken Curry");
    assert_eq!(json["id"].as_str().unwrap().len(), 26);
}

#[tokio::test]
async fn test_create_meal_plan_truncates_datetime_input() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/api/meal-plans",
        Some(serde_json::json!({
            "date": "2025-06-16T09:30:00.000Z",
            "mealType": "lunch",
            "recipeId": recipe_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["date"], "2025-06-16");
}

#[tokio::test]
async fn test_create_meal_plan_with_unknown_recipe_is_400() {
    let app = create_test_app().await;

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/api/meal-plans",
        Some(serde_json::json!({
            "date": "2025-06-16",
            "mealType": "dinner",
            "recipeId": "01JYDOESNOTEXIST0000000000",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Referenced recipe does not exist");
}

#[tokio::test]
async fn test_create_meal_plan_rejects_bad_date_and_meal_type() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/api/meal-plans",
        Some(serde_json::json!({
            "date": "June 16th",
            "mealType": "dinner",
            "recipeId": recipe_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Invalid date"));

    let (status, json) = send(
        &app.router,
        Method::POST,
        "/api/meal-plans",
        Some(serde_json::json!({
            "date": "2025-06-16",
            "mealType": "brunch",
            "recipeId": recipe_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("Meal type must be"));
}

#[tokio::test]
async fn test_list_meal_plans_range_is_inclusive() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;

    for date in ["2025-06-13", "2025-06-14", "2025-06-17", "2025-06-20", "2025-06-21"] {
        seed_plan(&app.router, date, "dinner", &recipe_id).await;
    }

    let (status, json) = send(
        &app.router,
        Method::GET,
        "/api/meal-plans?startDate=2025-06-14&endDate=2025-06-20",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2025-06-14", "2025-06-17", "2025-06-20"]);
}

#[tokio::test]
async fn test_list_meal_plans_accepts_datetime_bounds() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;
    seed_plan(&app.router, "2025-06-16", "dinner", &recipe_id).await;
    seed_plan(&app.router, "2025-06-30", "dinner", &recipe_id).await;

    // Clients send full ISO timestamps for the week bounds
    let (status, json) = send(
        &app.router,
        Method::GET,
        "/api/meal-plans?startDate=2025-06-15T00:00:00.000Z&endDate=2025-06-21T00:00:00.000Z",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let plans = json.as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0]["date"], "2025-06-16");
}

#[tokio::test]
async fn test_list_meal_plans_ignores_lone_bound() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;
    seed_plan(&app.router, "2025-06-16", "dinner", &recipe_id).await;
    seed_plan(&app.router, "2025-06-30", "dinner", &recipe_id).await;

    let (_, with_start_only) = send(
        &app.router,
        Method::GET,
        "/api/meal-plans?startDate=2025-06-29",
        None,
    )
    .await;
    assert_eq!(with_start_only.as_array().unwrap().len(), 2);

    let (_, with_empty_bound) = send(
        &app.router,
        Method::GET,
        "/api/meal-plans?startDate=2025-06-29&endDate=",
        None,
    )
    .await;
    assert_eq!(with_empty_bound.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_meal_plan_then_404() {
    let app = create_test_app().await;
    let recipe_id = seed_recipe(&app.router, "Chicken Curry").await;
    let plan_id = seed_plan(&app.router, "2025-06-16", "dinner", &recipe_id).await;

    let (status, json) = send(
        &app.router,
        Method::DELETE,
        &format!("/api/meal-plans/{plan_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Meal plan deleted successfully");

    let (status, json) = send(
        &app.router,
        Method::DELETE,
        &format!("/api/meal-plans/{plan_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Meal plan not found");

    // The recipe itself is untouched
    let (status, _) = send(
        &app.router,
        Method::GET,
        &format!("/api/recipes/{recipe_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
