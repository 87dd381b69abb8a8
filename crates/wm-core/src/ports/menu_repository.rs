use async_trait::async_trait;

use super::RepositoryError;
use crate::menu::Menu;

/// MenuRepositoryPort
///
/// Persistence of generated [`Menu`] snapshots.
///
/// Conventions:
/// - `add` stores the menu together with all its selections
/// - `fetch_all` returns menus newest first (by `generated_at`)
/// - `delete` of an unknown id is a no-op
#[async_trait]
pub trait MenuRepositoryPort: Send + Sync {
    async fn add(&self, menu: &Menu) -> Result<(), RepositoryError>;

    async fn fetch_all(&self) -> Result<Vec<Menu>, RepositoryError>;

    async fn delete(&self, menu: &Menu) -> Result<(), RepositoryError>;
}
