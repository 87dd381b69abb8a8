//! # Application Dependencies
//!
//! Dependency grouping for use-case construction. This is NOT a Builder:
//! no build steps, no default values, no hidden logic. Every port is required.

use std::sync::Arc;
use wm_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
#[derive(Clone)]
pub struct AppDeps {
    // Persistence
    pub recipe_repo: Arc<dyn RecipeRepositoryPort>,
    pub menu_repo: Arc<dyn MenuRepositoryPort>,

    // Image attachments
    pub image_store: Arc<dyn ImageStorePort>,
    pub image_codec: Arc<dyn ImageCodecPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
}
