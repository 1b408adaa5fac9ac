mod recipes_create_created_at_idx;
mod recipes_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        recipes_create_table::Operation,
        recipes_create_created_at_idx::Operation,
    ]
);
