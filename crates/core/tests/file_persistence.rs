use chrono::NaiveDate;
use planner_core::storage::{FileBackend, PersistentStore};
use planner_core::task::{Task, TaskPriority, TaskRepository};
use planner_core::{Planner, PlannerConfig};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn open_repo(dir: &TempDir) -> TaskRepository {
    TaskRepository::open(PersistentStore::new(FileBackend::new(dir.path())))
}

#[test]
fn test_persistence_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let task = Task::new("Persistent task", date("2024-06-10"))
        .with_description("Should survive reload")
        .with_priority(TaskPriority::High)
        .with_category("Work");

    {
        let mut repo = open_repo(&temp_dir);
        repo.add_task(task.clone());
        repo.add_task(Task::new("Second", date("2024-06-11")));
    }

    let repo = open_repo(&temp_dir);
    assert_eq!(repo.tasks().len(), 2);
    assert_eq!(repo.tasks()[0], task);
    assert_eq!(repo.tasks()[1].title, "Second");
    assert_eq!(repo.categories(), ["Work".to_string()]);
}

#[test]
fn test_persisted_layout() {
    let temp_dir = TempDir::new().unwrap();
    let mut repo = open_repo(&temp_dir);
    repo.add_task(
        Task::new("Dentist", date("2024-06-13"))
            .with_id("t-1")
            .with_priority(TaskPriority::Low)
            .with_category("Health"),
    );
    repo.toggle_completed("t-1");

    let tasks: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(
        tasks,
        serde_json::json!([{
            "taskId": "t-1",
            "title": "Dentist",
            "description": "",
            "date": "2024-06-13",
            "priority": "low",
            "completed": true,
            "category": "Health"
        }])
    );

    let categories: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("categories.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(categories, serde_json::json!(["Health"]));
}

#[test]
fn test_corrupt_files_recover_empty() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("tasks.json"), "not json at all").unwrap();
    std::fs::write(temp_dir.path().join("categories.json"), "[\"Work\"]").unwrap();

    let mut repo = open_repo(&temp_dir);
    assert!(repo.tasks().is_empty());
    assert_eq!(repo.categories(), ["Work".to_string()]);

    // The next mutation overwrites the corrupt blob.
    repo.add_task(Task::new("Fresh start", date("2024-06-10")));
    let reopened = open_repo(&temp_dir);
    assert_eq!(reopened.tasks().len(), 1);
}

#[test]
fn test_planner_session_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = PlannerConfig {
        data_dir: temp_dir.path().join("planner"),
        ..PlannerConfig::default()
    };
    let today = date("2024-06-12");

    let mut planner = Planner::open(&config);
    planner.begin_new_task(today).title = "Write report".to_string();
    let id = planner.save_draft().unwrap();
    planner.close();

    let planner = Planner::open(&config);
    let view = planner.week_view(today).unwrap();
    let wednesday = view.day(today).unwrap();
    assert_eq!(wednesday.weekday, "Wed");
    assert_eq!(wednesday.tasks.len(), 1);
    assert_eq!(wednesday.tasks[0].task_id, id);
}

#[test]
fn test_read_only_session_keeps_unreadable_records() {
    let temp_dir = TempDir::new().unwrap();
    let tasks_path = temp_dir.path().join("tasks.json");
    let raw = r#"[{"taskId":"good","title":"Good","description":"","date":"2024-06-10","priority":"medium","completed":false},{"taskId":"bad","title":"Bad","description":"","date":"","priority":"medium","completed":false}]"#;
    std::fs::write(&tasks_path, raw).unwrap();
    let config = PlannerConfig {
        data_dir: temp_dir.path().to_path_buf(),
        ..PlannerConfig::default()
    };

    let planner = Planner::open(&config);
    let view = planner.week_view(date("2024-06-10")).unwrap();
    assert_eq!(view.task_count(), 1);
    planner.close();

    assert_eq!(std::fs::read_to_string(&tasks_path).unwrap(), raw);
    assert!(!temp_dir.path().join("categories.json").exists());
}
