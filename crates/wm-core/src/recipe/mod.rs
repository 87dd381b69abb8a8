//! Recipe domain model.

mod error;
mod model;
mod thumbnail;

pub use error::RecipeError;
pub use model::{validate_name, Recipe, RecipeDraft};
pub use thumbnail::Thumbnail;
