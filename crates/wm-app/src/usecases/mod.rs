//! Use cases: one stateless operation per user-facing intent.
//!
//! Each use case is built from the ports it needs (`from_port` /
//! `from_ports`) and exposes a single `execute`.

mod add_recipe;
mod count_recipes;
mod delete_menu;
mod delete_recipe;
mod error;
mod fetch_menus;
mod fetch_recipes;
mod generate_menu;
mod prepare_recipe_image;
mod update_recipe;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_recipe::AddRecipe;
pub use count_recipes::CountRecipes;
pub use delete_menu::DeleteMenu;
pub use delete_recipe::DeleteRecipe;
pub use error::UseCaseError;
pub use fetch_menus::FetchMenus;
pub use fetch_recipes::FetchRecipes;
pub use generate_menu::GenerateMenu;
pub use prepare_recipe_image::{LoadRecipeImage, PrepareRecipeImage, PreparedImage};
pub use update_recipe::UpdateRecipe;
