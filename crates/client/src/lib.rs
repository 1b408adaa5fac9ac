mod api;
mod board;
mod error;

pub use api::*;
pub use board::*;
pub use error::*;
