//! Generated menu snapshots.

mod error;
mod model;

pub use error::MenuError;
pub use model::{Menu, MenuSelection};
