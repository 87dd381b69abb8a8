//! Caller-side state for menu generation.
//!
//! [`MenuGate`] decides whether generation is offered at all;
//! [`MenuPlanner`] owns the day selection and the last outcome and drives
//! the use cases. Both are plain state: the caller owns threading and
//! rendering.

mod gate;
mod menu_planner;

pub use gate::{GateError, MenuGate};
pub use menu_planner::{MenuPlanner, PlannerError};
