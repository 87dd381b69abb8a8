//! # Configuration Loader
//!
//! Reads the TOML file and maps it into the `AppConfig` DTO. Pure data
//! loading: no validation and no defaults. Empty values are filled in by
//! [`resolve_settings`](super::wiring::resolve_settings).

use anyhow::Context;
use std::path::Path;
use wm_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [storage]
            database_path = "/srv/recipes/whattomake.db"
            images_dir = "/srv/recipes/Images"

            [menu]
            min_recipes_required = 3
            "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.database_path,
            PathBuf::from("/srv/recipes/whattomake.db")
        );
        assert_eq!(config.images_dir, PathBuf::from("/srv/recipes/Images"));
        assert_eq!(config.menu.min_recipes_required, 3);
    }

    #[test]
    fn test_load_config_keeps_missing_values_empty() {
        let file = write_config("[storage]\n");

        let config = load_config(file.path()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_negative_minimum_falls_back_to_default() {
        let file = write_config("[menu]\nmin_recipes_required = -1\n");

        let config = load_config(file.path()).unwrap();
        let resolved =
            crate::bootstrap::resolve_settings(config, Some(PathBuf::from("/data"))).unwrap();

        assert_eq!(resolved.menu.min_recipes_required, 7);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let file = write_config("[storage\ndatabase_path = ");

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("TOML"), "got: {err}");
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let err = load_config(Path::new("/this/path/does/not/exist/config.toml")).unwrap_err();
        assert!(
            err.to_string().contains("Failed to read config file"),
            "got: {err}"
        );
    }
}
