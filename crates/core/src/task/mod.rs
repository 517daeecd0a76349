//! Task module
//!
//! This module contains task-related types and logic.

mod draft;
mod event;
mod model;
mod repository;

pub use draft::TaskDraft;
pub use event::PlannerEvent;
pub use model::*;
pub use repository::{PlannerSnapshot, TaskRepository};
