mod menu_mapper;
mod recipe_mapper;

pub use menu_mapper::{MenuRowMapper, StoredMenu};
pub use recipe_mapper::RecipeRowMapper;
