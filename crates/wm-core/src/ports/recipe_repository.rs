use async_trait::async_trait;

use super::RepositoryError;
use crate::recipe::Recipe;

/// RecipeRepositoryPort
///
/// Persistence of [`Recipe`] values.
///
/// Conventions:
/// - every write is persisted before the call returns (no implicit autosave)
/// - `update` matches the stored record by `recipe.id` and returns
///   [`RepositoryError::NotFound`] when there is none
/// - `delete` of an unknown id is a no-op
/// - `fetch_all` returns recipes sorted by name, ascending
#[async_trait]
pub trait RecipeRepositoryPort: Send + Sync {
    async fn add(&self, recipe: &Recipe) -> Result<(), RepositoryError>;

    async fn update(&self, recipe: &Recipe) -> Result<(), RepositoryError>;

    async fn delete(&self, recipe: &Recipe) -> Result<(), RepositoryError>;

    async fn fetch_all(&self) -> Result<Vec<Recipe>, RepositoryError>;
}
