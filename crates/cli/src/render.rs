//! Plain-text rendering of planner views

use std::fmt::Write;

use planner_core::task::Task;
use planner_core::view::{ViewOptions, WeekView};

fn task_line(task: &Task) -> String {
    let mut line = format!(
        "  [{}] {} ({})",
        if task.completed { "x" } else { " " },
        task.title,
        task.priority
    );
    if let Some(category) = task.category_label() {
        let _ = write!(line, " #{}", category);
    }
    let _ = write!(line, "  {}", task.task_id);
    line
}

/// Render a week as one section per day
pub fn render_week(view: &WeekView, options: &ViewOptions) -> String {
    let mut out = String::new();

    if let (Some(first), Some(last)) = (view.days.first(), view.days.last()) {
        let _ = writeln!(
            out,
            "Week of {} to {} (offset {}, sorted by {}, completed {})",
            first.label,
            last.label,
            view.week_offset,
            options.sort_mode,
            if options.show_completed { "shown" } else { "hidden" }
        );
    }

    for day in &view.days {
        let _ = writeln!(out, "\n{} {}", day.weekday, day.label);
        if day.tasks.is_empty() {
            let _ = writeln!(out, "  (no tasks)");
            continue;
        }
        for task in &day.tasks {
            let _ = writeln!(out, "{}", task_line(task));
        }
    }

    out
}

pub fn render_categories(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories yet\n".to_string();
    }
    categories.iter().map(|c| format!("{}\n", c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use planner_core::task::TaskPriority;
    use planner_core::view::project_week;

    #[test]
    fn test_render_week() {
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let tasks = vec![Task::new("Standup", monday)
            .with_id("t-1")
            .with_priority(TaskPriority::High)
            .with_category("Work")
            .completed()];
        let options = ViewOptions::default();
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let view = project_week(&tasks, today, &options).unwrap();

        let text = render_week(&view, &options);
        assert!(text.starts_with("Week of 6/9 to 6/15 (offset 0, sorted by title, completed shown)"));
        assert!(text.contains("\nMon 6/10\n  [x] Standup (high) #Work  t-1\n"));
        assert!(text.contains("\nSun 6/9\n  (no tasks)\n"));
    }

    #[test]
    fn test_render_categories() {
        assert_eq!(render_categories(&[]), "No categories yet\n");
        assert_eq!(
            render_categories(&["Work".to_string(), "Home".to_string()]),
            "Work\nHome\n"
        );
    }
}
