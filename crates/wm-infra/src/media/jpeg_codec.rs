use anyhow::{Context, Result};
use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops::FilterType, ColorType, DynamicImage, GenericImageView};
use wm_core::config::ImageConfig;
use wm_core::ports::{ImageCodecPort, ImageError};
use wm_core::Thumbnail;

/// Decodes any supported upload format and re-encodes it as JPEG.
#[derive(Debug, Clone, Copy)]
pub struct JpegImageCodec {
    max_edge: u32,
    thumbnail_quality: u8,
    original_quality: u8,
}

impl JpegImageCodec {
    pub fn new(max_edge: u32, thumbnail_quality: u8, original_quality: u8) -> Self {
        Self {
            max_edge,
            thumbnail_quality,
            original_quality,
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(
            config.thumbnail_max_edge,
            config.thumbnail_quality,
            config.original_quality,
        )
    }
}

fn decode(image_bytes: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(image_bytes).map_err(|e| ImageError::Decode(e.to_string()))
}

fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100))
        .encode(rgb.as_raw(), width, height, ColorType::Rgb8.into())
        .context("encode jpeg")?;
    Ok(bytes)
}

#[async_trait]
impl ImageCodecPort for JpegImageCodec {
    async fn encode_thumbnail(&self, image_bytes: &[u8]) -> Result<Thumbnail, ImageError> {
        let decoded = decode(image_bytes)?;
        let (original_width, original_height) = decoded.dimensions();
        let (target_width, target_height) =
            calculate_target_size(original_width, original_height, self.max_edge);

        let resized = if target_width == original_width && target_height == original_height {
            decoded
        } else {
            decoded.resize_exact(target_width, target_height, FilterType::Triangle)
        };

        let bytes = encode_jpeg(&resized, self.thumbnail_quality)
            .map_err(|e| ImageError::Encode(format!("{e:#}")))?;
        Ok(Thumbnail::new(bytes))
    }

    async fn encode_original(&self, image_bytes: &[u8]) -> Result<Vec<u8>, ImageError> {
        let decoded = decode(image_bytes)?;
        encode_jpeg(&decoded, self.original_quality)
            .map_err(|e| ImageError::Encode(format!("{e:#}")))
    }
}

/// Scale `(width, height)` so the longer edge is at most `max_edge`,
/// keeping the aspect ratio. Smaller images are left alone.
fn calculate_target_size(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }

    if width >= height {
        let scaled_height = ((height as f64) * (max_edge as f64) / (width as f64)).round() as u32;
        (max_edge, scaled_height.max(1))
    } else {
        let scaled_width = ((width as f64) * (max_edge as f64) / (height as f64)).round() as u32;
        (scaled_width.max(1), max_edge)
    }
}
