//! Environment-driven planner configuration

use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;

use crate::view::{SortMode, ViewOptions};

pub const DATA_DIR_ENV: &str = "PLANNER_DATA_DIR";
pub const SHOW_COMPLETED_ENV: &str = "PLANNER_SHOW_COMPLETED";
pub const SORT_ENV: &str = "PLANNER_SORT";

const DEFAULT_DATA_DIR: &str = ".planner-data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    pub data_dir: PathBuf,
    pub show_completed: bool,
    pub sort_mode: SortMode,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            show_completed: true,
            sort_mode: SortMode::default(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl PlannerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let data_dir = lookup(DATA_DIR_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let show_completed = lookup(SHOW_COMPLETED_ENV)
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or(defaults.show_completed);

        let sort_mode = match lookup(SORT_ENV) {
            Some(raw) => raw.parse::<SortMode>().unwrap_or_else(|e| {
                warn!("Ignoring {}: {}", SORT_ENV, e);
                defaults.sort_mode
            }),
            None => defaults.sort_mode,
        };

        Self {
            data_dir,
            show_completed,
            sort_mode,
        }
    }

    /// Initial view options for a session
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            week_offset: 0,
            show_completed: self.show_completed,
            sort_mode: self.sort_mode,
        }
    }
}
