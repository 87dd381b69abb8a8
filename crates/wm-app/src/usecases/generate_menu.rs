use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, info};
use wm_core::ports::{ClockPort, MenuRepositoryPort, RecipeRepositoryPort};
use wm_core::{Menu, MenuError, MenuSelection, TimestampMs};

use super::UseCaseError;

/// Use case that picks recipes for the requested days and records the menu.
///
/// Flow:
/// 1. fetch every recipe (fails with `NoRecipesAvailable` when there are none)
/// 2. shuffle the whole collection uniformly
/// 3. keep the first `min(days.len(), recipes.len())`
/// 4. bump and persist the usage count of each kept recipe, one at a time
/// 5. persist the menu snapshot
///
/// The steps are not transactional. If an update or the final menu write
/// fails, counts already persisted stay incremented and the error is returned.
pub struct GenerateMenu {
    recipe_repo: Arc<dyn RecipeRepositoryPort>,
    menu_repo: Arc<dyn MenuRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl GenerateMenu {
    pub fn from_ports(
        recipe_repo: Arc<dyn RecipeRepositoryPort>,
        menu_repo: Arc<dyn MenuRepositoryPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            recipe_repo,
            menu_repo,
            clock,
        }
    }

    /// Generates and persists a menu for `days`.
    ///
    /// `days` is stored untouched, including when it is empty or longer than
    /// the recipe collection; only `selections` is truncated.
    #[tracing::instrument(
        name = "usecase.generate_menu.execute",
        skip(self, days),
        fields(days = days.len())
    )]
    pub async fn execute(&self, days: Vec<String>) -> Result<Menu, UseCaseError> {
        let mut recipes = self.recipe_repo.fetch_all().await?;
        if recipes.is_empty() {
            return Err(MenuError::NoRecipesAvailable.into());
        }

        recipes.shuffle(&mut rand::rng());
        recipes.truncate(days.len());
        debug!(available_days = days.len(), selected = recipes.len(), "Recipes selected");

        let mut selections = Vec::with_capacity(recipes.len());
        for mut recipe in recipes {
            recipe.record_usage();
            self.recipe_repo.update(&recipe).await?;
            selections.push(MenuSelection::from(&recipe));
        }

        let generated_at = TimestampMs::from_epoch_millis(self.clock.now_ms());
        let menu = Menu::new(days, selections, generated_at);
        self.menu_repo.add(&menu).await?;

        info!(
            menu_id = %menu.id,
            days = menu.days.len(),
            selections = menu.selections.len(),
            "Menu generated"
        );
        Ok(menu)
    }
}
