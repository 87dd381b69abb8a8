//! # Pure Data Module
//!
//! Configuration DTOs and the TOML → DTO mapping. No validation and no
//! defaulting happens here: a missing key is recorded as an empty value and
//! the bootstrap layer decides what to do with it.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file (may be empty)
    pub database_path: PathBuf,

    /// Directory holding original recipe images (may be empty)
    pub images_dir: PathBuf,

    /// Directory for rolling log files (may be empty, disables file logging)
    pub log_dir: PathBuf,

    pub images: ImageConfig,

    pub menu: MenuConfig,
}

/// Image encoding knobs. Zero means "not configured".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageConfig {
    pub thumbnail_max_edge: u32,
    pub thumbnail_quality: u8,
    pub original_quality: u8,
}

/// Menu generation knobs. Zero means "not configured".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    pub min_recipes_required: usize,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    /// An integer that does not fit its field is recorded as 0 ("not
    /// configured"), the same as a missing key.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section_str = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };
        let section_int = |section: &str, key: &str| -> i64 {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
        };

        Ok(Self {
            database_path: PathBuf::from(section_str("storage", "database_path")),
            images_dir: PathBuf::from(section_str("storage", "images_dir")),
            log_dir: PathBuf::from(section_str("logging", "log_dir")),
            images: ImageConfig {
                thumbnail_max_edge: u32::try_from(section_int("images", "thumbnail_max_edge"))
                    .unwrap_or(0),
                thumbnail_quality: u8::try_from(section_int("images", "thumbnail_quality"))
                    .unwrap_or(0),
                original_quality: u8::try_from(section_int("images", "original_quality"))
                    .unwrap_or(0),
            },
            menu: MenuConfig {
                min_recipes_required: usize::try_from(section_int("menu", "min_recipes_required"))
                    .unwrap_or(0),
            },
        })
    }

    /// Create empty AppConfig (all empty/zero values)
    pub fn empty() -> Self {
        Self {
            database_path: PathBuf::new(),
            images_dir: PathBuf::new(),
            log_dir: PathBuf::new(),
            images: ImageConfig {
                thumbnail_max_edge: 0,
                thumbnail_quality: 0,
                original_quality: 0,
            },
            menu: MenuConfig {
                min_recipes_required: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_maps_all_sections() {
        let value: toml::Value = toml::from_str(
            r#"
            [storage]
            database_path = "/data/whattomake.db"
            images_dir = "/data/Images"

            [logging]
            log_dir = "/data/logs"

            [images]
            thumbnail_max_edge = 400
            thumbnail_quality = 60
            original_quality = 90

            [menu]
            min_recipes_required = 5
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/data/whattomake.db"));
        assert_eq!(config.images_dir, PathBuf::from("/data/Images"));
        assert_eq!(config.log_dir, PathBuf::from("/data/logs"));
        assert_eq!(config.images.thumbnail_max_edge, 400);
        assert_eq!(config.images.thumbnail_quality, 60);
        assert_eq!(config.images.original_quality, 90);
        assert_eq!(config.menu.min_recipes_required, 5);
    }

    #[test]
    fn test_from_toml_missing_keys_are_empty() {
        let value: toml::Value = toml::from_str("[storage]\n").unwrap();
        assert_eq!(AppConfig::from_toml(&value).unwrap(), AppConfig::empty());
    }

    #[test]
    fn test_from_toml_out_of_range_integers_read_as_unset() {
        let value: toml::Value = toml::from_str(
            r#"
            [images]
            thumbnail_max_edge = -600
            thumbnail_quality = 300
            original_quality = -1

            [menu]
            min_recipes_required = -1
            "#,
        )
        .unwrap();

        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.images.thumbnail_max_edge, 0);
        assert_eq!(config.images.thumbnail_quality, 0);
        assert_eq!(config.images.original_quality, 0);
        assert_eq!(config.menu.min_recipes_required, 0);
    }
}
