mod menu_row;
mod recipe_row;

pub use menu_row::{MenuRow, MenuSelectionRow, NewMenuRow, NewMenuSelectionRow};
pub use recipe_row::{NewRecipeRow, RecipeRow};
