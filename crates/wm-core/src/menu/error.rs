use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("no recipes available to build a menu")]
    NoRecipesAvailable,
}
