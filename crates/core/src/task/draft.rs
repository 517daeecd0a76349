//! Editable task drafts
//!
//! A draft is the uncommitted copy of a task held while a form is open. It
//! only becomes a `Task` through `into_task`, which rejects an empty title
//! or a missing date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{generate_task_id, Task, TaskPriority};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    /// Id of the task being edited, `None` for a new task
    pub task_id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub priority: TaskPriority,
    pub completed: bool,
    pub category: String,
}

impl TaskDraft {
    /// Blank draft for a new task on `date`
    pub fn new(date: NaiveDate) -> Self {
        Self {
            task_id: None,
            title: String::new(),
            description: String::new(),
            date: Some(date),
            priority: TaskPriority::Medium,
            completed: false,
            category: String::new(),
        }
    }

    /// Draft pre-filled from a stored task
    pub fn from_task(task: &Task) -> Self {
        Self {
            task_id: Some(task.task_id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            date: Some(task.date),
            priority: task.priority,
            completed: task.completed,
            category: task.category.clone().unwrap_or_default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.task_id.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput("Title is required".to_string()));
        }
        if self.date.is_none() {
            return Err(Error::InvalidInput("Date is required".to_string()));
        }
        Ok(())
    }

    /// Validate and build the task, assigning a fresh id to new drafts
    pub fn into_task(self) -> Result<Task> {
        self.into_task_with(generate_task_id)
    }

    /// Like `into_task`, taking the id for a new draft from `new_id`
    pub fn into_task_with(self, new_id: impl FnOnce() -> String) -> Result<Task> {
        self.validate()?;
        let date = self
            .date
            .ok_or_else(|| Error::InvalidInput("Date is required".to_string()))?;

        let category = self.category.trim();
        Ok(Task {
            task_id: self.task_id.unwrap_or_else(new_id),
            title: self.title.trim().to_string(),
            description: self.description,
            date,
            priority: self.priority,
            completed: self.completed,
            category: (!category.is_empty()).then(|| category.to_string()),
        })
    }
}
