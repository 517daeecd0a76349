//! Terminal front end for the weekly planner
//!
//! Reads and writes the planner data directory, then prints the result.
//!
//! ```bash
//! weekplan week --offset 1 --sort priority
//! weekplan add --title "Dentist" --date 2024-06-13 --category Health
//! PLANNER_DATA_DIR=~/.weekplan weekplan toggle <task-id>
//! ```

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planner_core::config::DATA_DIR_ENV;
use planner_core::task::{TaskDraft, TaskPriority};
use planner_core::view::SortMode;
use planner_core::{Planner, PlannerConfig};

#[derive(Debug, Parser)]
#[command(name = "weekplan", version, about = "Weekly task planner")]
struct Cli {
    /// Directory holding tasks.json and categories.json
    #[arg(long, env = DATA_DIR_ENV, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a week of tasks
    Week {
        /// Weeks forward (positive) or back (negative) from the current week
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
        /// Hide completed tasks
        #[arg(long, conflicts_with = "show_completed")]
        hide_completed: bool,
        /// Show completed tasks
        #[arg(long)]
        show_completed: bool,
        /// Order within a day: title or priority
        #[arg(long)]
        sort: Option<SortMode>,
    },
    /// Add a task
    Add(TaskFields),
    /// Edit a task
    Edit {
        task_id: String,
        #[command(flatten)]
        fields: TaskFields,
    },
    /// Flip a task's completed flag
    Toggle { task_id: String },
    /// Delete a task
    Delete { task_id: String },
    /// List known categories
    Categories,
}

#[derive(Debug, Args)]
struct TaskFields {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Date as YYYY-MM-DD; new tasks default to today
    #[arg(long)]
    date: Option<NaiveDate>,
    #[arg(long)]
    priority: Option<TaskPriority>,
    #[arg(long)]
    category: Option<String>,
}

impl TaskFields {
    fn apply(self, draft: &mut TaskDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(date) = self.date {
            draft.date = Some(date);
        }
        if let Some(priority) = self.priority {
            draft.priority = priority;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weekplan=info,planner_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = PlannerConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let today = Local::now().date_naive();
    let mut planner = Planner::open(&config);
    let result = run(&mut planner, cli.command, today);
    planner.close();
    result
}

fn run(planner: &mut Planner, command: Command, today: NaiveDate) -> anyhow::Result<()> {
    match command {
        Command::Week {
            offset,
            hide_completed,
            show_completed,
            sort,
        } => {
            planner.go_to_week(offset);
            if hide_completed {
                planner.set_show_completed(false);
            } else if show_completed {
                planner.set_show_completed(true);
            }
            if let Some(sort) = sort {
                planner.set_sort_mode(sort);
            }
            let view = planner
                .week_view(today)
                .context("Failed to build week view")?;
            print!("{}", render::render_week(&view, planner.options()));
        }
        Command::Add(fields) => {
            fields.apply(planner.begin_new_task(today));
            let task_id = planner.save_draft().context("Task not saved")?;
            println!("Added {}", task_id);
        }
        Command::Edit { task_id, fields } => {
            if !planner.begin_edit(&task_id) {
                bail!("No task with id {}", task_id);
            }
            if let Some(draft) = planner.draft_mut() {
                fields.apply(draft);
            }
            planner.save_draft().context("Task not saved")?;
            println!("Updated {}", task_id);
        }
        Command::Toggle { task_id } => {
            if !planner.toggle_completed(&task_id) {
                bail!("No task with id {}", task_id);
            }
            let completed = planner
                .repository()
                .get_task(&task_id)
                .map(|t| t.completed)
                .unwrap_or_default();
            println!(
                "{} {}",
                task_id,
                if completed { "completed" } else { "reopened" }
            );
        }
        Command::Delete { task_id } => {
            if !planner.delete_task(&task_id) {
                bail!("No task with id {}", task_id);
            }
            println!("Deleted {}", task_id);
        }
        Command::Categories => {
            print!(
                "{}",
                render::render_categories(planner.repository().categories())
            );
        }
    }
    Ok(())
}
