//! Default values applied by the bootstrap layer when a config key is absent.

/// Longest edge of a generated thumbnail, in pixels.
pub const THUMBNAIL_MAX_EDGE: u32 = 600;

/// JPEG quality (1-100) for thumbnails.
pub const THUMBNAIL_QUALITY: u8 = 70;

/// JPEG quality (1-100) for stored originals.
pub const ORIGINAL_QUALITY: u8 = 85;

/// Recipes needed before menu generation is offered.
pub const MIN_RECIPES_REQUIRED: usize = 7;

pub const DATABASE_FILE_NAME: &str = "whattomake.db";
pub const IMAGES_DIR_NAME: &str = "Images";
