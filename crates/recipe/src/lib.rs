mod data;
mod error;
mod input;
mod store;

pub use data::*;
pub use error::*;
pub use input::*;
pub use store::*;

use strum::{AsRefStr, Display, EnumString};

/// Recipe category as stored and exchanged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum RecipeCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Dessert,
}
