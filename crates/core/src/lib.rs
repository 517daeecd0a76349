//! Core library for the weekly planner
//!
//! This crate contains the core planner logic, including:
//! - Task storage and category tracking
//! - Local key-value persistence
//! - Week projection (filtering, sorting, navigation)
//! - The planner session driven by front ends

pub mod config;
pub mod error;
pub mod planner;
pub mod storage;
pub mod task;
pub mod view;

pub use config::PlannerConfig;
pub use error::Error;
pub use planner::Planner;
pub type Result<T> = std::result::Result<T, Error>;
