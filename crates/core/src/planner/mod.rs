//! Planner session
//!
//! The view-model a front end drives: week navigation, display toggles and
//! the task draft lifecycle, on top of the task repository.

mod session;

pub use session::Planner;
