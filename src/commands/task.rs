use crate::db::buckets::Buckets;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task, TaskFilter, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[arg(help = "Title for a new task")]
    title: Option<String>,

    #[arg(short, long, help = "Task description")]
    description: Option<String>,

    #[arg(long, help = "Due date (YYYY-MM-DD, 'YYYY-MM-DD HH:MM', 'today' or 'tomorrow')")]
    due: Option<String>,

    #[arg(short, long, help = "Priority: low, medium or high")]
    priority: Option<String>,

    #[arg(short, long, help = "Bucket name to file the task under")]
    bucket: Option<String>,

    #[arg(short, long, help = "Show all tasks")]
    show: bool,

    #[arg(long, value_name = "ID", help = "Mark a task as completed")]
    complete: Option<i64>,

    #[arg(long, value_name = "ID", help = "Edit a task interactively")]
    edit: Option<i64>,

    #[arg(long, value_name = "ID", help = "Delete a task")]
    delete: Option<i64>,
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    if args.show {
        return show(&mut tasks);
    }

    if let Some(id) = args.complete {
        return match tasks.get_by_id(id)? {
            Some(task) => {
                tasks.set_status(id, TaskStatus::Completed)?;
                msg_success!(Message::TaskCompleted(task.title));
                Ok(())
            }
            None => {
                msg_error!(Message::TaskNotFound(id));
                Ok(())
            }
        };
    }

    if let Some(id) = args.edit {
        return match tasks.get_by_id(id)? {
            Some(task) => edit(&mut tasks, task),
            None => {
                msg_error!(Message::TaskNotFound(id));
                Ok(())
            }
        };
    }

    if let Some(id) = args.delete {
        return match tasks.get_by_id(id)? {
            Some(task) => {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                    .interact()?;
                if confirmed {
                    tasks.delete(id)?;
                    msg_success!(Message::TaskDeleted);
                }
                Ok(())
            }
            None => {
                msg_error!(Message::TaskNotFound(id));
                Ok(())
            }
        };
    }

    if let Some(title) = args.title {
        let bucket_id = match &args.bucket {
            Some(name) => match Buckets::new()?.get_by_name(name)? {
                Some(bucket) => bucket.id,
                None => {
                    msg_error!(Message::BucketNotFound(name.clone()));
                    return Ok(());
                }
            },
            None => None,
        };

        let priority = match &args.priority {
            Some(priority) => priority.parse::<Priority>()?,
            None => Priority::Medium,
        };
        let due_date = args.due.as_deref().map(parse_due).transpose()?;

        let task = Task::new(&title, args.description.clone(), due_date, priority, bucket_id);
        tasks.insert(&task)?;
        msg_success!(Message::TaskCreated(title));
        return Ok(());
    }

    show(&mut tasks)
}

fn edit(tasks: &mut Tasks, mut task: Task) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Title")
        .default(task.title.clone())
        .interact_text()?;
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Description")
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let priorities = ["low", "medium", "high"];
    let current = priorities.iter().position(|p| *p == task.priority.as_str()).unwrap_or(1);
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Priority")
        .items(&priorities)
        .default(current)
        .interact()?;
    let priority: Priority = priorities[selected].parse()?;

    let description = if description.is_empty() { None } else { Some(description) };
    if title == task.title && description == task.description && priority == task.priority {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    task.title = title;
    task.description = description;
    task.priority = priority;
    tasks.update(&task)?;
    msg_success!(Message::TaskUpdated(task.title));
    Ok(())
}

fn show(tasks: &mut Tasks) -> Result<()> {
    let all = tasks.fetch(TaskFilter::All)?;
    if all.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }
    msg_print!(Message::TasksHeader, true);
    View::tasks(&all)
}

/// Parses a due date from the CLI; dates without a time land on midnight.
fn parse_due(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    let date = match input.to_lowercase().as_str() {
        "today" => Local::now().date_naive(),
        "tomorrow" => Local::now().date_naive() + Duration::days(1),
        _ => match NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
            Ok(datetime) => return Ok(datetime),
            Err(_) => NaiveDate::parse_from_str(input, "%Y-%m-%d")?,
        },
    };
    Ok(date.and_hms_opt(0, 0, 0).unwrap())
}
