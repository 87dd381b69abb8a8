use std::sync::Arc;

use tracing::{info, warn};
use wm_core::ports::{ImageStorePort, RecipeRepositoryPort};
use wm_core::Recipe;

use super::UseCaseError;

/// Use case that deletes a recipe and cleans up its stored original image.
pub struct DeleteRecipe {
    repo: Arc<dyn RecipeRepositoryPort>,
    image_store: Arc<dyn ImageStorePort>,
}

impl DeleteRecipe {
    pub fn from_ports(
        repo: Arc<dyn RecipeRepositoryPort>,
        image_store: Arc<dyn ImageStorePort>,
    ) -> Self {
        Self { repo, image_store }
    }

    /// Deletes the recipe, removing its original image first.
    ///
    /// Image removal is best-effort: a failure is logged and ignored. A
    /// repository failure is returned to the caller.
    #[tracing::instrument(
        name = "usecase.delete_recipe.execute",
        skip(self, recipe),
        fields(recipe_id = %recipe.id)
    )]
    pub async fn execute(&self, recipe: &Recipe) -> Result<(), UseCaseError> {
        if let Some(image_ref) = &recipe.image_ref {
            if let Err(e) = self.image_store.delete_original(image_ref).await {
                warn!(image_ref = %image_ref, error = %e, "Ignoring original image removal failure");
            }
        }

        self.repo.delete(recipe).await?;

        info!(recipe_id = %recipe.id, "Recipe deleted");
        Ok(())
    }
}
