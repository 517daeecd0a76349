//! Week projection
//!
//! Turns the task collection into seven date columns for display. The
//! projection works on copies and never touches stored tasks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::sort::{sort_tasks, SortMode};
use super::week::week_dates;
use crate::task::Task;
use crate::Result;

/// Display options for a week projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    pub week_offset: i64,
    pub show_completed: bool,
    pub sort_mode: SortMode,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            week_offset: 0,
            show_completed: true,
            sort_mode: SortMode::default(),
        }
    }
}

/// One day of the week grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Month/day, e.g. `6/10`
    pub label: String,
    /// Short weekday name, e.g. `Mon`
    pub weekday: String,
    pub tasks: Vec<Task>,
}

impl DayColumn {
    fn new(date: NaiveDate, tasks: Vec<Task>) -> Self {
        Self {
            date,
            label: date.format("%-m/%-d").to_string(),
            weekday: date.format("%a").to_string(),
            tasks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    pub week_offset: i64,
    pub days: Vec<DayColumn>,
}

impl WeekView {
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayColumn> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }
}

/// Visible tasks for one date, filtered and sorted
pub fn day_tasks(
    tasks: &[Task],
    date: NaiveDate,
    show_completed: bool,
    sort_mode: SortMode,
) -> Vec<Task> {
    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|t| t.date == date)
        .filter(|t| show_completed || !t.completed)
        .cloned()
        .collect();
    sort_tasks(&mut visible, sort_mode);
    visible
}

/// Project `tasks` onto the week selected by `options`, relative to `today`
pub fn project_week(tasks: &[Task], today: NaiveDate, options: &ViewOptions) -> Result<WeekView> {
    let days = week_dates(today, options.week_offset)?
        .into_iter()
        .map(|date| {
            DayColumn::new(
                date,
                day_tasks(tasks, date, options.show_completed, options.sort_mode),
            )
        })
        .collect();

    Ok(WeekView {
        week_offset: options.week_offset,
        days,
    })
}
