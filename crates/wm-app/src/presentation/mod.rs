//! Read-only views derived from domain values for display.

mod recipe_detail;

pub use recipe_detail::RecipeDetail;
