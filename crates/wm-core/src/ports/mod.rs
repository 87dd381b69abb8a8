//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and infrastructure
//! implementations. The use cases only ever see these traits; concrete
//! storage and image handling live in `wm-infra`.

mod clock;
pub mod errors;
mod image_codec;
mod image_store;
mod menu_repository;
mod recipe_repository;

pub use clock::ClockPort;
pub use errors::{ImageError, RepositoryError};
pub use image_codec::ImageCodecPort;
pub use image_store::ImageStorePort;
pub use menu_repository::MenuRepositoryPort;
pub use recipe_repository::RecipeRepositoryPort;
