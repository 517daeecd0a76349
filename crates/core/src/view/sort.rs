//! Per-day task ordering

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::task::Task;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Title,
    /// Lexical order of the priority labels: high, low, medium
    Priority,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Priority => "priority",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "priority" => Ok(Self::Priority),
            other => Err(Error::InvalidInput(format!(
                "Unknown sort mode '{}', expected title or priority",
                other
            ))),
        }
    }
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Title order ignoring case and accents
///
/// Ties fall back to accents (unaccented first) and then case (lowercase
/// first).
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| b.cmp(a))
}

pub fn compare_tasks(a: &Task, b: &Task, mode: SortMode) -> Ordering {
    match mode {
        SortMode::Title => compare_titles(&a.title, &b.title),
        SortMode::Priority => a.priority.as_str().cmp(b.priority.as_str()),
    }
}

/// Stable sort; equal keys keep their collection order
pub fn sort_tasks(tasks: &mut [Task], mode: SortMode) {
    tasks.sort_by(|a, b| compare_tasks(a, b, mode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskPriority;
    use chrono::NaiveDate;

    fn task(title: &str, priority: TaskPriority) -> Task {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Task::new(title, date).with_priority(priority)
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_title_order_ignores_case() {
        let mut tasks = vec![
            task("banana", TaskPriority::Low),
            task("Apple", TaskPriority::Low),
            task("cherry", TaskPriority::Low),
        ];
        sort_tasks(&mut tasks, SortMode::Title);
        assert_eq!(titles(&tasks), vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_title_case_tie_puts_lowercase_first() {
        assert_eq!(compare_titles("report", "Report"), Ordering::Less);
        assert_eq!(compare_titles("Report", "report"), Ordering::Greater);
        assert_eq!(compare_titles("Report", "Report"), Ordering::Equal);
    }

    #[test]
    fn test_title_order_ignores_accents() {
        assert_eq!(compare_titles("Émile", "Zoe"), Ordering::Less);
        assert_eq!(compare_titles("éclair", "fig"), Ordering::Less);
        assert_eq!(compare_titles("Ångström", "Bravo"), Ordering::Less);

        let mut tasks = vec![
            task("zebra", TaskPriority::Low),
            task("Éclair", TaskPriority::Low),
            task("apple", TaskPriority::Low),
            task("fig", TaskPriority::Low),
        ];
        sort_tasks(&mut tasks, SortMode::Title);
        assert_eq!(titles(&tasks), vec!["apple", "Éclair", "fig", "zebra"]);
    }

    #[test]
    fn test_title_accent_tie_puts_plain_first() {
        assert_eq!(compare_titles("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "resume"), Ordering::Greater);
        assert_eq!(compare_titles("café", "cafes"), Ordering::Less);
    }

    #[test]
    fn test_priority_order_is_lexical() {
        let mut tasks = vec![
            task("m", TaskPriority::Medium),
            task("l", TaskPriority::Low),
            task("h", TaskPriority::High),
        ];
        sort_tasks(&mut tasks, SortMode::Priority);
        assert_eq!(titles(&tasks), vec!["h", "l", "m"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut tasks = vec![
            task("first", TaskPriority::Low),
            task("second", TaskPriority::High),
            task("third", TaskPriority::Low),
        ];
        sort_tasks(&mut tasks, SortMode::Priority);
        assert_eq!(titles(&tasks), vec!["second", "first", "third"]);
    }

    #[test]
    fn test_sort_mode_parse_and_display() {
        assert_eq!("Priority".parse::<SortMode>().unwrap(), SortMode::Priority);
        assert_eq!(SortMode::Title.to_string(), "title");
        assert!("date".parse::<SortMode>().is_err());
    }
}
