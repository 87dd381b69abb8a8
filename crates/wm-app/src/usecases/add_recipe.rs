use std::sync::Arc;

use tracing::info;
use wm_core::ports::RecipeRepositoryPort;
use wm_core::{Recipe, RecipeDraft};

use super::UseCaseError;

/// Use case that creates and persists a new [`Recipe`].
pub struct AddRecipe {
    repo: Arc<dyn RecipeRepositoryPort>,
}

impl AddRecipe {
    pub fn from_port(repo: Arc<dyn RecipeRepositoryPort>) -> Self {
        Self { repo }
    }

    /// Validates the draft and persists it as a new recipe with a zero usage count.
    ///
    /// # Errors
    ///
    /// `EmptyName` when the trimmed name is empty (the repository is not
    /// called), otherwise whatever the repository returns.
    #[tracing::instrument(name = "usecase.add_recipe.execute", skip(self, draft))]
    pub async fn execute(&self, draft: RecipeDraft) -> Result<Recipe, UseCaseError> {
        let recipe = Recipe::create(draft)?;
        self.repo.add(&recipe).await?;

        info!(recipe_id = %recipe.id, name = %recipe.name, "Recipe added");
        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::InMemoryRecipeRepo;
    use wm_core::{ImageRef, RecipeError, Thumbnail};

    #[tokio::test]
    async fn test_execute_persists_new_recipe() {
        let repo = Arc::new(InMemoryRecipeRepo::default());
        let uc = AddRecipe::from_port(repo.clone());

        let draft = RecipeDraft::named("Pasta")
            .with_notes("Family favorite")
            .with_thumbnail(Thumbnail::new(vec![1, 2, 3]))
            .with_image_ref(ImageRef::from("img_abc.jpg"));
        let created = uc.execute(draft).await.unwrap();

        let stored = repo.snapshot();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, created.id);
        assert_eq!(stored[0].name, "Pasta");
        assert_eq!(stored[0].usage_count, 0);
        assert_eq!(stored[0].thumbnail, Some(Thumbnail::new(vec![1, 2, 3])));
        assert_eq!(stored[0].image_ref, Some(ImageRef::from("img_abc.jpg")));
    }

    #[tokio::test]
    async fn test_blank_name_fails_without_touching_repository() {
        let repo = Arc::new(InMemoryRecipeRepo::default());
        let uc = AddRecipe::from_port(repo.clone());

        for name in ["", "   ", "\t\n"] {
            let err = uc.execute(RecipeDraft::named(name)).await.unwrap_err();
            assert_eq!(err, UseCaseError::Recipe(RecipeError::EmptyName));
        }
        assert!(repo.calls().is_empty());
    }
}
