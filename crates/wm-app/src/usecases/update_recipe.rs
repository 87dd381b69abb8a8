use std::sync::Arc;

use tracing::info;
use wm_core::ports::RecipeRepositoryPort;
use wm_core::{Recipe, RecipeDraft};

use super::UseCaseError;

/// Use case that overwrites the editable fields of an existing recipe.
pub struct UpdateRecipe {
    repo: Arc<dyn RecipeRepositoryPort>,
}

impl UpdateRecipe {
    pub fn from_port(repo: Arc<dyn RecipeRepositoryPort>) -> Self {
        Self { repo }
    }

    /// Applies `draft` to `recipe` and persists the result.
    ///
    /// The same name rule as [`AddRecipe`](super::AddRecipe) applies, so a
    /// stored recipe never ends up with a blank name. Identity and usage count
    /// are carried over from `recipe`.
    #[tracing::instrument(
        name = "usecase.update_recipe.execute",
        skip(self, recipe, draft),
        fields(recipe_id = %recipe.id)
    )]
    pub async fn execute(&self, recipe: &Recipe, draft: RecipeDraft) -> Result<Recipe, UseCaseError> {
        let mut updated = recipe.clone();
        updated.apply(draft)?;
        self.repo.update(&updated).await?;

        info!(recipe_id = %updated.id, "Recipe updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::InMemoryRecipeRepo;
    use wm_core::ports::RepositoryError;
    use wm_core::{ImageRef, RecipeError};

    #[tokio::test]
    async fn test_execute_overwrites_fields_and_keeps_usage() {
        let repo = Arc::new(InMemoryRecipeRepo::seeded(&["Chili"]));
        let mut original = repo.snapshot().remove(0);
        original.usage_count = 4;
        repo.update(&original).await.unwrap();

        let uc = UpdateRecipe::from_port(repo.clone());
        let updated = uc
            .execute(
                &original,
                RecipeDraft::named("Vegan Chili")
                    .with_notes("less salt")
                    .with_image_ref(ImageRef::from("img_new.jpg")),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        let stored = repo.snapshot().remove(0);
        assert_eq!(stored.name, "Vegan Chili");
        assert_eq!(stored.notes.as_deref(), Some("less salt"));
        assert_eq!(stored.image_ref, Some(ImageRef::from("img_new.jpg")));
        assert_eq!(stored.usage_count, 4);
    }

    #[tokio::test]
    async fn test_clearing_optional_fields() {
        let repo = Arc::new(InMemoryRecipeRepo::default());
        let recipe = Recipe::create(
            RecipeDraft::named("Salad")
                .with_notes("crunchy")
                .with_image_ref(ImageRef::from("img_1.jpg")),
        )
        .unwrap();
        repo.add(&recipe).await.unwrap();

        UpdateRecipe::from_port(repo.clone())
            .execute(&recipe, RecipeDraft::named("Salad"))
            .await
            .unwrap();

        let stored = repo.snapshot().remove(0);
        assert!(stored.notes.is_none());
        assert!(stored.image_ref.is_none());
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let repo = Arc::new(InMemoryRecipeRepo::seeded(&["Chili"]));
        let recipe = repo.snapshot().remove(0);

        let err = UpdateRecipe::from_port(repo.clone())
            .execute(&recipe, RecipeDraft::named("  "))
            .await
            .unwrap_err();

        assert_eq!(err, UseCaseError::Recipe(RecipeError::EmptyName));
        assert!(repo.calls().iter().all(|c| !c.starts_with("update")));
        assert_eq!(repo.snapshot()[0].name, "Chili");
    }

    #[tokio::test]
    async fn test_unknown_recipe_propagates_not_found() {
        let repo = Arc::new(InMemoryRecipeRepo::default());
        let ghost = Recipe::create(RecipeDraft::named("Ghost")).unwrap();

        let err = UpdateRecipe::from_port(repo)
            .execute(&ghost, RecipeDraft::named("Still Ghost"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            UseCaseError::Repository(RepositoryError::NotFound(ghost.id.to_string()))
        );
    }
}
