mod data;
mod date;
mod error;
mod input;
mod store;

pub use data::*;
pub use date::*;
pub use error::*;
pub use input::*;
pub use store::*;

use strum::{AsRefStr, Display, EnumString};

/// Meal slot within a planned day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];
}
