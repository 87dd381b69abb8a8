use std::sync::Arc;

use tracing::debug;
use wm_core::ports::RecipeRepositoryPort;

use super::UseCaseError;

/// Use case returning how many recipes are stored.
pub struct CountRecipes {
    repo: Arc<dyn RecipeRepositoryPort>,
}

impl CountRecipes {
    pub fn from_port(repo: Arc<dyn RecipeRepositoryPort>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(name = "usecase.count_recipes.execute", skip(self))]
    pub async fn execute(&self) -> Result<usize, UseCaseError> {
        let count = self.repo.fetch_all().await?.len();
        debug!(count, "Counted recipes");
        Ok(count)
    }
}
