use serde::{Deserialize, Serialize};

use crate::ids::{MenuId, RecipeId};
use crate::recipe::Recipe;
use crate::timestamp::TimestampMs;

/// A recipe as it was when the menu was generated.
///
/// Menus keep value copies so later edits or deletion of the recipe do not
/// change what a historical menu shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSelection {
    pub recipe_id: RecipeId,
    pub recipe_name: String,
}

impl From<&Recipe> for MenuSelection {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
        }
    }
}

/// Immutable snapshot pairing requested day labels with selected recipes.
///
/// `selections[i]` belongs to `days[i]`. `days` is kept exactly as requested,
/// so it can be longer than `selections` when fewer recipes existed than days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub generated_at: TimestampMs,
    pub days: Vec<String>,
    pub selections: Vec<MenuSelection>,
}

impl Menu {
    pub fn new(days: Vec<String>, selections: Vec<MenuSelection>, generated_at: TimestampMs) -> Self {
        debug_assert!(selections.len() <= days.len());
        Self {
            id: MenuId::new(),
            generated_at,
            days,
            selections,
        }
    }

    /// Day/recipe pairs for display. Days without a selection are skipped.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &MenuSelection)> {
        self.days
            .iter()
            .map(String::as_str)
            .zip(self.selections.iter())
    }
}
