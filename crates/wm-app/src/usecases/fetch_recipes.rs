use std::sync::Arc;

use tracing::debug;
use wm_core::ports::RecipeRepositoryPort;
use wm_core::Recipe;

use super::UseCaseError;

/// Use case for listing all recipes (sorted by name by the repository).
pub struct FetchRecipes {
    repo: Arc<dyn RecipeRepositoryPort>,
}

impl FetchRecipes {
    pub fn from_port(repo: Arc<dyn RecipeRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.fetch_recipes.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Recipe>, UseCaseError> {
        let recipes = self.repo.fetch_all().await?;
        debug!(count = recipes.len(), "Fetched recipes");
        Ok(recipes)
    }
}
