//! View projection
//!
//! Read-only derivations of the task collection: week navigation, date
//! bucketing, completion filtering and per-day sorting.

mod projection;
mod sort;
mod week;

pub use projection::{day_tasks, project_week, DayColumn, ViewOptions, WeekView};
pub use sort::{compare_tasks, compare_titles, sort_tasks, SortMode};
pub use week::{week_dates, week_start, DAYS_PER_WEEK};
