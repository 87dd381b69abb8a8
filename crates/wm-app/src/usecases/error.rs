use thiserror::Error;
use wm_core::ports::{ImageError, RepositoryError};
use wm_core::{MenuError, RecipeError};

/// Failure returned by every use case.
///
/// Callers match on the variant (or on [`UseCaseError::code`]) rather than on
/// the display string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UseCaseError {
    #[error(transparent)]
    Recipe(#[from] RecipeError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Image(#[from] ImageError),
}

impl UseCaseError {
    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            UseCaseError::Recipe(RecipeError::EmptyName) => "empty_name",
            UseCaseError::Menu(MenuError::NoRecipesAvailable) => "no_recipes_available",
            UseCaseError::Repository(RepositoryError::NotFound(_)) => "not_found",
            UseCaseError::Repository(RepositoryError::Storage(_)) => "repository",
            UseCaseError::Image(_) => "image",
        }
    }
}
