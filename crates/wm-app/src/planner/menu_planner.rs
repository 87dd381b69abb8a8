use thiserror::Error;
use tracing::warn;
use wm_core::Menu;

use super::{GateError, MenuGate};
use crate::usecases::{CountRecipes, GenerateMenu, UseCaseError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Gate(#[from] GateError),

    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

impl PlannerError {
    pub fn code(&self) -> &'static str {
        match self {
            PlannerError::Gate(e) => e.code(),
            PlannerError::UseCase(e) => e.code(),
        }
    }
}

/// State behind a "generate menu" screen.
pub struct MenuPlanner {
    count_recipes: CountRecipes,
    generate_menu: GenerateMenu,
    gate: MenuGate,
    selected_days: Vec<String>,
    available_recipes: usize,
    last_menu: Option<Menu>,
    last_error: Option<PlannerError>,
}

impl MenuPlanner {
    pub fn new(count_recipes: CountRecipes, generate_menu: GenerateMenu, gate: MenuGate) -> Self {
        Self {
            count_recipes,
            generate_menu,
            gate,
            selected_days: Vec::new(),
            available_recipes: 0,
            last_menu: None,
            last_error: None,
        }
    }

    pub fn selected_days(&self) -> &[String] {
        &self.selected_days
    }

    pub fn available_recipes(&self) -> usize {
        self.available_recipes
    }

    pub fn last_menu(&self) -> Option<&Menu> {
        self.last_menu.as_ref()
    }

    pub fn last_error(&self) -> Option<&PlannerError> {
        self.last_error.as_ref()
    }

    pub fn gate(&self) -> MenuGate {
        self.gate
    }

    /// Select `day` if it is not selected yet, otherwise deselect it.
    pub fn toggle_day(&mut self, day: &str) {
        if let Some(pos) = self.selected_days.iter().position(|d| d == day) {
            self.selected_days.remove(pos);
        } else {
            self.selected_days.push(day.to_string());
        }
    }

    pub fn set_selected_days(&mut self, days: Vec<String>) {
        self.selected_days = days;
    }

    pub fn can_generate(&self) -> bool {
        self.gate.is_open(self.available_recipes, &self.selected_days)
    }

    /// Refresh the recipe count. On failure the count drops to zero, which
    /// keeps generation closed, and the error is kept for display.
    pub async fn load_availability(&mut self) {
        match self.count_recipes.execute().await {
            Ok(count) => self.available_recipes = count,
            Err(e) => {
                warn!(error = %e, "Failed to count recipes");
                self.available_recipes = 0;
                self.last_error = Some(e.into());
            }
        }
    }

    /// Check the gate and, when open, generate a menu for the selected days.
    ///
    /// Success replaces the last menu and clears the error; any failure
    /// clears the last menu and records the error.
    pub async fn generate(&mut self) -> Result<Menu, PlannerError> {
        let outcome = match self.gate.check(self.available_recipes, &self.selected_days) {
            Ok(()) => self
                .generate_menu
                .execute(self.selected_days.clone())
                .await
                .map_err(PlannerError::from),
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(menu) => {
                self.last_menu = Some(menu.clone());
                self.last_error = None;
                Ok(menu)
            }
            Err(e) => {
                self.last_menu = None;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }
}
