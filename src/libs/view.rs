use crate::db::buckets::Bucket;
use crate::db::chat_history::ChatRecord;
use crate::libs::assistant::TaskEnhancement;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "BUCKET", "DUE", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.bucket_label(),
                task.due_date.map(|due| due.format(DATE_FORMAT).to_string()).unwrap_or_default(),
                task.priority,
                task.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn buckets(buckets: &[(Bucket, i64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR", "TASKS"]);
        for (bucket, task_count) in buckets {
            table.add_row(row![
                bucket.id.unwrap_or(0),
                bucket.name,
                bucket.color.as_deref().unwrap_or(""),
                task_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn history(records: &[ChatRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["WHEN", "QUESTION", "ANSWER"]);
        for record in records {
            table.add_row(row![
                record.created_at.as_deref().unwrap_or(""),
                record.message,
                record.response
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn enhancement(task: &Task, enhancement: &TaskEnhancement) -> Result<()> {
        println!("\nSuggestions for '{}'\n", task.title);
        println!("Description:\n{}\n", enhancement.enhanced_description);
        println!("Subtasks:");
        for subtask in &enhancement.suggested_subtasks {
            println!("  - {}", subtask);
        }
        println!("\nEstimated duration: {}", enhancement.estimated_duration);

        Ok(())
    }
}
