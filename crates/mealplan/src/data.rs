use mealbook_recipe::RecipeData;
use mealbook_shared::unix_to_rfc3339;
use serde::{Deserialize, Serialize};

use crate::{MealPlanError, MealPlanWithRecipe};

/// Meal plan as it appears on the wire, with the recipe embedded. `recipe`
/// is `null` for plans whose recipe no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanData {
    pub id: String,
    pub date: String,
    pub meal_type: String,
    pub recipe_id: String,
    pub recipe: Option<RecipeData>,
    pub created_at: String,
}

impl MealPlanData {
    pub fn from_record(record: MealPlanWithRecipe) -> Result<Self, MealPlanError> {
        let recipe = record.recipe.map(RecipeData::from_record).transpose()?;

        Ok(Self {
            id: record.plan.id,
            date: record.plan.date,
            meal_type: record.plan.meal_type,
            recipe_id: record.plan.recipe_id,
            recipe,
            created_at: unix_to_rfc3339(record.plan.created_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MealPlan;

    fn record(recipe: Option<mealbook_recipe::Recipe>) -> MealPlanWithRecipe {
        MealPlanWithRecipe {
            plan: MealPlan {
                id: "01JF6JGQ3ZV9XK5M2P8T4W6Y0A".to_string(),
                date: "2024-01-15".to_string(),
                meal_type: "dinner".to_string(),
                recipe_id: "01JF6JGQ3ZV9XK5M2P8T4W6Y0B".to_string(),
                created_at: 1_700_000_000,
            },
            recipe,
        }
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let data = MealPlanData::from_record(record(None)).unwrap();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["mealType"], "dinner");
        assert_eq!(json["recipeId"], "01JF6JGQ3ZV9XK5M2P8T4W6Y0B");
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
        assert!(json["recipe"].is_null());
    }

    #[test]
    fn test_joined_recipe_is_embedded() {
        let recipe = mealbook_recipe::Recipe {
            id: "01JF6JGQ3ZV9XK5M2P8T4W6Y0B".to_string(),
            name: "Oatmeal".to_string(),
            ingredients: r#"["milk","oats"]"#.to_string(),
            ..Default::default()
        };

        let data = MealPlanData::from_record(record(Some(recipe))).unwrap();
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["recipe"]["name"], "Oatmeal");
        assert_eq!(json["recipe"]["ingredients"][1], "oats");
    }
}
