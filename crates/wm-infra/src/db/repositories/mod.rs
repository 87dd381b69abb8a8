mod menu_repo;
mod recipe_repo;

pub use menu_repo::DieselMenuRepository;
pub use recipe_repo::DieselRecipeRepository;

use wm_core::ports::RepositoryError;

/// Collapse an infrastructure failure into the port's storage error,
/// keeping the whole context chain in the message.
fn storage_error(err: anyhow::Error) -> RepositoryError {
    RepositoryError::Storage(format!("{err:#}"))
}
