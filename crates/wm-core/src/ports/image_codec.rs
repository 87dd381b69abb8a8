use async_trait::async_trait;

use super::ImageError;
use crate::recipe::Thumbnail;

/// Encoder turning an uploaded photo into the two forms a recipe keeps.
#[async_trait]
pub trait ImageCodecPort: Send + Sync {
    /// Downscale and encode a small preview image.
    async fn encode_thumbnail(&self, image_bytes: &[u8]) -> Result<Thumbnail, ImageError>;

    /// Re-encode the photo at full resolution for the image store.
    async fn encode_original(&self, image_bytes: &[u8]) -> Result<Vec<u8>, ImageError>;
}
