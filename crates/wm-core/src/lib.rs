//! # wm-core
//!
//! Core domain models and ports for whattomake.
//!
//! This crate contains pure domain types and the port traits the use cases
//! depend on. It has no infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod menu;
pub mod ports;
pub mod recipe;
pub mod timestamp;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{ImageRef, MenuId, RecipeId};
pub use menu::{Menu, MenuError, MenuSelection};
pub use recipe::{Recipe, RecipeDraft, RecipeError, Thumbnail};
pub use timestamp::TimestampMs;
