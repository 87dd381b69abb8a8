//! # Dependency Injection
//!
//! The only place that depends on `wm-infra` and `wm-app` at the same time.
//! It fills unset configuration values, builds the infrastructure adapters
//! and groups them into [`AppDeps`]. No business decisions happen here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;
use wm_app::AppDeps;
use wm_core::config::{defaults, AppConfig};
use wm_infra::db::pool::{init_db_pool, DbPool};
use wm_infra::db::repositories::{DieselMenuRepository, DieselRecipeRepository};
use wm_infra::db::DieselSqliteExecutor;
use wm_infra::{FsImageStore, JpegImageCodec, SystemClock};

/// Directory created under the platform data dir.
const APP_DIR_NAME: &str = "whattomake";

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("No data directory available for default storage paths")]
    DataDirUnavailable,

    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Image storage initialization failed: {0}")]
    ImageStoreInit(String),
}

/// Replace every empty or zero configuration value with its default.
///
/// Storage paths default to `<data_dir>/whattomake/...`; `data_dir` is only
/// required when one of them is empty. An empty `log_dir` stays empty.
pub fn resolve_settings(mut config: AppConfig, data_dir: Option<PathBuf>) -> WiringResult<AppConfig> {
    let needs_data_dir =
        config.database_path.as_os_str().is_empty() || config.images_dir.as_os_str().is_empty();
    if needs_data_dir {
        let app_dir = data_dir
            .ok_or(WiringError::DataDirUnavailable)?
            .join(APP_DIR_NAME);
        if config.database_path.as_os_str().is_empty() {
            config.database_path = app_dir.join(defaults::DATABASE_FILE_NAME);
        }
        if config.images_dir.as_os_str().is_empty() {
            config.images_dir = app_dir.join(defaults::IMAGES_DIR_NAME);
        }
    }

    let images = &mut config.images;
    if images.thumbnail_max_edge == 0 {
        images.thumbnail_max_edge = defaults::THUMBNAIL_MAX_EDGE;
    }
    if images.thumbnail_quality == 0 {
        images.thumbnail_quality = defaults::THUMBNAIL_QUALITY;
    }
    if images.original_quality == 0 {
        images.original_quality = defaults::ORIGINAL_QUALITY;
    }
    if config.menu.min_recipes_required == 0 {
        config.menu.min_recipes_required = defaults::MIN_RECIPES_REQUIRED;
    }

    Ok(config)
}

/// Create the SQLite pool, creating the parent directory first.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

/// Build every port implementation from a resolved configuration.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let pool = create_db_pool(&config.database_path)?;

    std::fs::create_dir_all(&config.images_dir).map_err(|e| {
        WiringError::ImageStoreInit(format!(
            "Failed to create {}: {}",
            config.images_dir.display(),
            e
        ))
    })?;

    info!(
        database = %config.database_path.display(),
        images = %config.images_dir.display(),
        "Storage wired"
    );

    Ok(AppDeps {
        recipe_repo: Arc::new(DieselRecipeRepository::new(DieselSqliteExecutor::new(
            pool.clone(),
        ))),
        menu_repo: Arc::new(DieselMenuRepository::new(DieselSqliteExecutor::new(pool))),
        image_store: Arc::new(FsImageStore::new(config.images_dir.clone())),
        image_codec: Arc::new(JpegImageCodec::from_config(&config.images)),
        clock: Arc::new(SystemClock),
    })
}
