//! Change notifications emitted by the task repository

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlannerEvent {
    TaskAdded { task_id: String },
    TaskUpdated { task_id: String },
    TaskToggled { task_id: String, completed: bool },
    TaskDeleted { task_id: String },
    CategoryAdded { category: String },
}

impl PlannerEvent {
    /// The task this event refers to, if any
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Self::TaskAdded { task_id }
            | Self::TaskUpdated { task_id }
            | Self::TaskToggled { task_id, .. }
            | Self::TaskDeleted { task_id } => Some(task_id.as_str()),
            Self::CategoryAdded { .. } => None,
        }
    }
}
