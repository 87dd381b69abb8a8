//! # Use Case Accessor
//!
//! [`AppRuntime`] owns the wired dependencies; [`UseCases`] hands out use
//! cases with their ports already attached, so callers never touch
//! [`AppDeps`] directly.
//!
//! ```rust,no_run
//! # async fn example(runtime: &whattomake::bootstrap::AppRuntime) -> Result<(), wm_app::UseCaseError> {
//! let _recipes = runtime.usecases().fetch_recipes().execute().await?;
//! # Ok(())
//! # }
//! ```

use wm_app::planner::{MenuGate, MenuPlanner};
use wm_app::usecases::{
    AddRecipe, CountRecipes, DeleteMenu, DeleteRecipe, FetchMenus, FetchRecipes, GenerateMenu,
    LoadRecipeImage, PrepareRecipeImage, UpdateRecipe,
};
use wm_app::AppDeps;
use wm_core::config::AppConfig;

use super::wiring::{wire_dependencies, WiringResult};

/// Application runtime: resolved configuration plus wired ports.
pub struct AppRuntime {
    config: AppConfig,
    deps: AppDeps,
}

impl AppRuntime {
    pub fn new(config: AppConfig, deps: AppDeps) -> Self {
        Self { config, deps }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

/// Wire a runtime from an already resolved configuration.
pub fn create_runtime(config: AppConfig) -> WiringResult<AppRuntime> {
    let deps = wire_dependencies(&config)?;
    Ok(AppRuntime::new(config, deps))
}

/// Use cases accessor for AppRuntime.
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    fn deps(&self) -> &'a AppDeps {
        &self.runtime.deps
    }

    pub fn add_recipe(&self) -> AddRecipe {
        AddRecipe::from_port(self.deps().recipe_repo.clone())
    }

    pub fn update_recipe(&self) -> UpdateRecipe {
        UpdateRecipe::from_port(self.deps().recipe_repo.clone())
    }

    pub fn delete_recipe(&self) -> DeleteRecipe {
        DeleteRecipe::from_ports(
            self.deps().recipe_repo.clone(),
            self.deps().image_store.clone(),
        )
    }

    pub fn fetch_recipes(&self) -> FetchRecipes {
        FetchRecipes::from_port(self.deps().recipe_repo.clone())
    }

    pub fn count_recipes(&self) -> CountRecipes {
        CountRecipes::from_port(self.deps().recipe_repo.clone())
    }

    pub fn fetch_menus(&self) -> FetchMenus {
        FetchMenus::from_port(self.deps().menu_repo.clone())
    }

    pub fn generate_menu(&self) -> GenerateMenu {
        GenerateMenu::from_ports(
            self.deps().recipe_repo.clone(),
            self.deps().menu_repo.clone(),
            self.deps().clock.clone(),
        )
    }

    pub fn delete_menu(&self) -> DeleteMenu {
        DeleteMenu::from_port(self.deps().menu_repo.clone())
    }

    pub fn prepare_recipe_image(&self) -> PrepareRecipeImage {
        PrepareRecipeImage::from_ports(
            self.deps().image_codec.clone(),
            self.deps().image_store.clone(),
        )
    }

    pub fn load_recipe_image(&self) -> LoadRecipeImage {
        LoadRecipeImage::from_port(self.deps().image_store.clone())
    }

    /// Planner gated by the configured minimum recipe count.
    pub fn menu_planner(&self) -> MenuPlanner {
        MenuPlanner::new(
            self.count_recipes(),
            self.generate_menu(),
            MenuGate::new(self.runtime.config.menu.min_recipes_required),
        )
    }
}
