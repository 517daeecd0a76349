//! Task repository
//!
//! Owns the task collection and the category registry for a session. Every
//! effective mutation re-saves the affected collection and broadcasts a
//! `PlannerEvent`. Mutations never fail: an unknown id leaves state untouched
//! and the operation reports `false`.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::event::PlannerEvent;
use super::model::Task;
use crate::storage::{PersistentStore, StorageKey};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Point-in-time copy of repository state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSnapshot {
    pub tasks: Vec<Task>,
    pub categories: Vec<String>,
}

pub struct TaskRepository {
    store: PersistentStore,
    tasks: Vec<Task>,
    categories: Vec<String>,
    events: broadcast::Sender<PlannerEvent>,
    // Set while the stored copy lags the in-memory one.
    tasks_dirty: bool,
    categories_dirty: bool,
}

impl TaskRepository {
    /// Load tasks and categories from `store`
    pub fn open(store: PersistentStore) -> Self {
        let tasks: Vec<Task> = store.load_records(StorageKey::Tasks);
        let categories: Vec<String> = store.load_records(StorageKey::Categories);
        info!(
            "Opened task repository with {} tasks and {} categories",
            tasks.len(),
            categories.len()
        );

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            tasks,
            categories,
            events,
            tasks_dirty: false,
            categories_dirty: false,
        }
    }

    /// Receive a `PlannerEvent` after every effective mutation
    pub fn subscribe(&self) -> broadcast::Receiver<PlannerEvent> {
        self.events.subscribe()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn get_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.task_id == task_id)
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        PlannerSnapshot {
            tasks: self.tasks.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Append a task that already carries its id
    ///
    /// Returns false, leaving the collection unchanged, if the id is taken.
    pub fn add_task(&mut self, task: Task) -> bool {
        if self.get_task(&task.task_id).is_some() {
            warn!("Ignoring add of task {}: id already exists", task.task_id);
            return false;
        }

        let task_id = task.task_id.clone();
        let category = task.category_label().map(str::to_string);
        self.tasks.push(task);
        self.persist_tasks();
        self.emit(PlannerEvent::TaskAdded { task_id });
        self.register_category(category.as_deref());
        true
    }

    /// Replace the task with the same id, keeping its position
    ///
    /// The category is registered even when no task matches.
    pub fn update_task(&mut self, task: Task) -> bool {
        let category = task.category_label().map(str::to_string);
        let position = self.tasks.iter().position(|t| t.task_id == task.task_id);
        let updated = match position {
            Some(index) => {
                let task_id = task.task_id.clone();
                self.tasks[index] = task;
                self.persist_tasks();
                self.emit(PlannerEvent::TaskUpdated { task_id });
                true
            }
            None => {
                debug!("Update ignored: task {} not found", task.task_id);
                false
            }
        };
        self.register_category(category.as_deref());
        updated
    }

    pub fn toggle_completed(&mut self, task_id: &str) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.task_id == task_id) else {
            debug!("Toggle ignored: task {} not found", task_id);
            return false;
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.persist_tasks();
        self.emit(PlannerEvent::TaskToggled {
            task_id: task_id.to_string(),
            completed,
        });
        true
    }

    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task_id != task_id);
        if self.tasks.len() == before {
            debug!("Delete ignored: task {} not found", task_id);
            return false;
        }

        self.persist_tasks();
        self.emit(PlannerEvent::TaskDeleted {
            task_id: task_id.to_string(),
        });
        true
    }

    /// Whether a collection failed to save since its last successful write
    pub fn has_unsaved_changes(&self) -> bool {
        self.tasks_dirty || self.categories_dirty
    }

    /// Retry any unsaved collection and release the repository
    ///
    /// Collections already in sync with storage are not rewritten.
    pub fn close(mut self) {
        if self.tasks_dirty {
            self.persist_tasks();
        }
        if self.categories_dirty {
            self.persist_categories();
        }
        if self.has_unsaved_changes() {
            warn!("Closed task repository with unsaved changes");
        } else {
            info!("Closed task repository");
        }
    }

    fn register_category(&mut self, category: Option<&str>) {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            return;
        };
        if self.categories.iter().any(|c| c == category) {
            return;
        }

        self.categories.push(category.to_string());
        self.persist_categories();
        self.emit(PlannerEvent::CategoryAdded {
            category: category.to_string(),
        });
    }

    fn persist_tasks(&mut self) {
        let saved = self.store.save(StorageKey::Tasks, &self.tasks);
        if saved {
            debug!("Persisted {} tasks", self.tasks.len());
        }
        self.tasks_dirty = !saved;
    }

    fn persist_categories(&mut self) {
        let saved = self.store.save(StorageKey::Categories, &self.categories);
        if saved {
            debug!("Persisted {} categories", self.categories.len());
        }
        self.categories_dirty = !saved;
    }

    fn emit(&self, event: PlannerEvent) {
        // No receivers is not an error.
        let _ = self.events.send(event);
    }
}
