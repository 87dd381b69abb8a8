//! whattomake application layer
//!
//! Stateless use cases orchestrating the `wm-core` ports, plus the
//! caller-side state used to gate and drive menu generation.

pub mod deps;
pub mod planner;
pub mod presentation;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::UseCaseError;
