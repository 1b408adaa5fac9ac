use std::collections::HashSet;

use mealbook_mealplan::MealPlanData;

use crate::{Category, categorize};

/// One line of the shopping list. The same ingredient planned in two
/// recipes yields two lines; nothing is merged or de-duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    pub name: String,
    pub recipe: String,
    pub category: Category,
}

/// Items grouped under one aisle heading.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<ShoppingItem>,
}

/// Derive the list from loaded plans. Plans whose recipe no longer exists
/// contribute nothing. Groups come back in aisle display order with empty
/// aisles skipped.
pub fn build_shopping_list(plans: &[MealPlanData]) -> Vec<CategoryGroup> {
    let mut items: Vec<ShoppingItem> = Vec::new();

    for plan in plans {
        let Some(recipe) = &plan.recipe else {
            continue;
        };

        for ingredient in &recipe.ingredients {
            items.push(ShoppingItem {
                name: ingredient.clone(),
                recipe: recipe.name.clone(),
                category: categorize(ingredient),
            });
        }
    }

    Category::ALL
        .iter()
        .filter_map(|&category| {
            let grouped: Vec<ShoppingItem> = items
                .iter()
                .filter(|item| item.category == category)
                .cloned()
                .collect();

            if grouped.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category,
                    items: grouped,
                })
            }
        })
        .collect()
}

/// Checked-off state for the rendered list. Kept client-side only and reset
/// on reload. Keys pair the ingredient with its recipe so the same
/// ingredient from two recipes checks independently.
#[derive(Debug, Clone, Default)]
pub struct CheckedItems(HashSet<String>);

impl CheckedItems {
    fn key(item: &ShoppingItem) -> String {
        format!("{}-{}", item.name, item.recipe)
    }

    pub fn toggle(&mut self, item: &ShoppingItem) {
        let key = Self::key(item);
        if !self.0.remove(&key) {
            self.0.insert(key);
        }
    }

    pub fn is_checked(&self, item: &ShoppingItem) -> bool {
        self.0.contains(&Self::key(item))
    }

    pub fn checked_count(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
