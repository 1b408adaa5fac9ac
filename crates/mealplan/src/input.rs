use serde::{Deserialize, Serialize};

/// Payload for `POST /api/meal-plans`. The date may carry a time component;
/// only the day part is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealPlan {
    pub date: String,
    pub meal_type: String,
    pub recipe_id: String,
}
