//! ID type wrappers for type safety.

mod id_macro;
mod image_ref;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

pub use image_ref::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuId(String);

impl_id!(RecipeId, MenuId);
