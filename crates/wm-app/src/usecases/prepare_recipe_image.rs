use std::sync::Arc;

use tracing::{debug, info};
use wm_core::ports::{ImageCodecPort, ImageStorePort};
use wm_core::{ImageRef, Thumbnail};

use super::UseCaseError;

/// The two image forms attached to a recipe draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedImage {
    pub thumbnail: Thumbnail,
    pub image_ref: ImageRef,
}

/// Use case turning a picked photo into a thumbnail plus a stored original.
///
/// Runs before `AddRecipe`/`UpdateRecipe`; the result is copied into the
/// draft. Nothing is written to the recipe repository here.
pub struct PrepareRecipeImage {
    codec: Arc<dyn ImageCodecPort>,
    image_store: Arc<dyn ImageStorePort>,
}

impl PrepareRecipeImage {
    pub fn from_ports(codec: Arc<dyn ImageCodecPort>, image_store: Arc<dyn ImageStorePort>) -> Self {
        Self { codec, image_store }
    }

    #[tracing::instrument(
        name = "usecase.prepare_recipe_image.execute",
        skip(self, image_bytes),
        fields(input_bytes = image_bytes.len())
    )]
    pub async fn execute(&self, image_bytes: &[u8]) -> Result<PreparedImage, UseCaseError> {
        let thumbnail = self.codec.encode_thumbnail(image_bytes).await?;
        let original = self.codec.encode_original(image_bytes).await?;
        let image_ref = self.image_store.save_original(&original).await?;

        info!(
            image_ref = %image_ref,
            thumbnail_bytes = thumbnail.as_bytes().len(),
            "Recipe image prepared"
        );
        Ok(PreparedImage {
            thumbnail,
            image_ref,
        })
    }
}

/// Use case reading back a stored original image.
pub struct LoadRecipeImage {
    image_store: Arc<dyn ImageStorePort>,
}

impl LoadRecipeImage {
    pub fn from_port(image_store: Arc<dyn ImageStorePort>) -> Self {
        Self { image_store }
    }

    /// Returns `Ok(None)` when nothing is stored under `image_ref`.
    #[tracing::instrument(
        name = "usecase.load_recipe_image.execute",
        skip(self, image_ref),
        fields(image_ref = %image_ref)
    )]
    pub async fn execute(&self, image_ref: &ImageRef) -> Result<Option<Vec<u8>>, UseCaseError> {
        let original = self.image_store.load_original(image_ref).await?;
        debug!(found = original.is_some(), "Loaded recipe image");
        Ok(original)
    }
}
