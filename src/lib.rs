//! whattomake: recipe organizer and weekly menu generator.
//!
//! The domain lives in `wm-core`, the use cases in `wm-app` and the SQLite
//! and filesystem adapters in `wm-infra`. This crate only assembles them.

pub mod bootstrap;
