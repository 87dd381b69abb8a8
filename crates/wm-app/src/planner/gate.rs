use thiserror::Error;
use wm_core::config::defaults::MIN_RECIPES_REQUIRED;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("You need at least {required} recipes to generate a menu. You currently have {available}.")]
    NotEnoughRecipes { required: usize, available: usize },

    #[error("Please select at least one day.")]
    NoDaysSelected,
}

impl GateError {
    pub fn code(&self) -> &'static str {
        match self {
            GateError::NotEnoughRecipes { .. } => "not_enough_recipes",
            GateError::NoDaysSelected => "no_days_selected",
        }
    }
}

/// Minimum-collection rule for offering menu generation.
///
/// `GenerateMenu` itself works with any non-empty collection; the gate keeps
/// users from generating menus out of a handful of recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGate {
    min_recipes_required: usize,
}

impl MenuGate {
    pub fn new(min_recipes_required: usize) -> Self {
        Self {
            min_recipes_required,
        }
    }

    pub fn min_recipes_required(&self) -> usize {
        self.min_recipes_required
    }

    /// Recipe count is checked before the day selection.
    pub fn check(&self, available_recipes: usize, days: &[String]) -> Result<(), GateError> {
        if available_recipes < self.min_recipes_required {
            return Err(GateError::NotEnoughRecipes {
                required: self.min_recipes_required,
                available: available_recipes,
            });
        }
        if days.is_empty() {
            return Err(GateError::NoDaysSelected);
        }
        Ok(())
    }

    pub fn is_open(&self, available_recipes: usize, days: &[String]) -> bool {
        self.check(available_recipes, days).is_ok()
    }
}

impl Default for MenuGate {
    fn default() -> Self {
        Self::new(MIN_RECIPES_REQUIRED)
    }
}
