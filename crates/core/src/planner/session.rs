//! Planner session state
//!
//! Holds what a front end needs between renders: the repository, the
//! selected week, the visibility and sort toggles, and the draft being
//! edited. Drafts only reach the repository through `save_draft`.

use chrono::NaiveDate;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::config::PlannerConfig;
use crate::storage::{FileBackend, PersistentStore};
use crate::task::{generate_task_id, PlannerEvent, PlannerSnapshot, TaskDraft, TaskRepository};
use crate::view::{project_week, SortMode, ViewOptions, WeekView};
use crate::{Error, Result};

pub struct Planner {
    repository: TaskRepository,
    options: ViewOptions,
    draft: Option<TaskDraft>,
    new_task_id: fn() -> String,
}

impl Planner {
    pub fn new(repository: TaskRepository, options: ViewOptions) -> Self {
        Self {
            repository,
            options,
            draft: None,
            new_task_id: generate_task_id,
        }
    }

    /// Open a file-backed session in the configured data directory
    pub fn open(config: &PlannerConfig) -> Self {
        info!("Using data directory: {:?}", config.data_dir);
        let store = PersistentStore::new(FileBackend::new(&config.data_dir));
        Self::new(TaskRepository::open(store), config.view_options())
    }

    pub fn repository(&self) -> &TaskRepository {
        &self.repository
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        self.repository.snapshot()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PlannerEvent> {
        self.repository.subscribe()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn next_week(&mut self) -> i64 {
        self.options.week_offset = self.options.week_offset.saturating_add(1);
        self.options.week_offset
    }

    pub fn previous_week(&mut self) -> i64 {
        self.options.week_offset = self.options.week_offset.saturating_sub(1);
        self.options.week_offset
    }

    pub fn go_to_week(&mut self, week_offset: i64) {
        self.options.week_offset = week_offset;
    }

    pub fn set_show_completed(&mut self, show_completed: bool) {
        self.options.show_completed = show_completed;
    }

    pub fn toggle_show_completed(&mut self) -> bool {
        self.options.show_completed = !self.options.show_completed;
        self.options.show_completed
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.options.sort_mode = sort_mode;
    }

    pub fn draft(&self) -> Option<&TaskDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut TaskDraft> {
        self.draft.as_mut()
    }

    /// Open a blank draft dated `today`, replacing any open draft
    pub fn begin_new_task(&mut self, today: NaiveDate) -> &mut TaskDraft {
        self.draft.insert(TaskDraft::new(today))
    }

    /// Open a draft copied from a stored task; false if the id is unknown
    pub fn begin_edit(&mut self, task_id: &str) -> bool {
        match self.repository.get_task(task_id) {
            Some(task) => {
                self.draft = Some(TaskDraft::from_task(task));
                true
            }
            None => false,
        }
    }

    /// Commit the open draft and close it, returning the saved task's id
    ///
    /// A draft that fails validation, or whose new id is already taken, stays
    /// open and nothing is stored.
    pub fn save_draft(&mut self) -> Result<String> {
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("No task is being edited".to_string()))?;

        let is_new = draft.is_new();
        let task = draft.clone().into_task_with(self.new_task_id)?;
        let task_id = task.task_id.clone();

        if is_new {
            if !self.repository.add_task(task) {
                warn!("Draft not saved: task id {} is already in use", task_id);
                return Err(Error::InvalidInput(format!(
                    "Task {} already exists",
                    task_id
                )));
            }
        } else if !self.repository.update_task(task) {
            debug!("Saved draft for task {} that no longer exists", task_id);
        }

        self.draft = None;
        Ok(task_id)
    }

    pub fn cancel_draft(&mut self) -> Option<TaskDraft> {
        self.draft.take()
    }

    /// Delete the task behind the open draft and close it
    pub fn delete_editing(&mut self) -> bool {
        let Some(draft) = self.draft.take() else {
            return false;
        };
        match draft.task_id {
            Some(task_id) => self.repository.delete_task(&task_id),
            None => false,
        }
    }

    pub fn toggle_completed(&mut self, task_id: &str) -> bool {
        self.repository.toggle_completed(task_id)
    }

    pub fn delete_task(&mut self, task_id: &str) -> bool {
        self.repository.delete_task(task_id)
    }

    /// Project the selected week relative to `today`
    pub fn week_view(&self, today: NaiveDate) -> Result<WeekView> {
        project_week(self.repository.tasks(), today, &self.options)
    }

    /// Drop any open draft and flush the repository
    pub fn close(self) {
        if self.draft.is_some() {
            debug!("Discarding unsaved draft on close");
        }
        self.repository.close();
    }
}
