mod meal_plans_create_date_idx;
mod meal_plans_create_recipe_id_idx;
mod meal_plans_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_2",
    vec_box![],
    vec_box![
        meal_plans_create_table::Operation,
        meal_plans_create_date_idx::Operation,
        meal_plans_create_recipe_id_idx::Operation,
    ]
);
