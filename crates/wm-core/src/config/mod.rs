//! Application configuration.

mod app_config;
pub mod defaults;

pub use app_config::{AppConfig, ImageConfig, MenuConfig};
