pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use runtime::{create_runtime, AppRuntime, UseCases};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{resolve_settings, wire_dependencies, WiringError};
