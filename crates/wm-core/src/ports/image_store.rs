use async_trait::async_trait;

use super::ImageError;
use crate::ids::ImageRef;

/// Storage for full-resolution recipe images.
#[async_trait]
pub trait ImageStorePort: Send + Sync {
    /// Persist already-encoded image bytes and return the generated reference.
    async fn save_original(&self, encoded: &[u8]) -> Result<ImageRef, ImageError>;

    /// Read back an original. `Ok(None)` when nothing is stored under the reference.
    async fn load_original(&self, image_ref: &ImageRef) -> Result<Option<Vec<u8>>, ImageError>;

    /// Remove an original. Fails when the file does not exist.
    async fn delete_original(&self, image_ref: &ImageRef) -> Result<(), ImageError>;
}
