use super::db::Db;
use crate::libs::task::{Priority, Task, TaskFilter, TaskStatus};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(super) const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    due_date TIMESTAMP,
    priority TEXT NOT NULL DEFAULT 'medium',
    status TEXT NOT NULL DEFAULT 'todo',
    bucket_id INTEGER REFERENCES buckets(id) ON DELETE SET NULL,
    completed_at TIMESTAMP,
    created_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime'))
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, priority, status, bucket_id)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, due_date = ?4, priority = ?5, status = ?6, bucket_id = ?7, completed_at = ?8
    WHERE id = ?1";
const UPDATE_TASK_STATUS: &str = "UPDATE tasks SET status = ?2, completed_at = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
// Tasks are listed due-date ascending, undated tasks last; the assistant
// relies on this order when it truncates long listings to the first ten.
const SELECT_TASKS: &str = "SELECT t.id, t.title, t.description, t.due_date, t.priority, t.status, t.bucket_id, b.name, t.completed_at, t.created_at
    FROM tasks t
    LEFT JOIN buckets b ON t.bucket_id = b.id";
const ORDER_BY_DUE: &str = "ORDER BY t.due_date IS NULL, t.due_date";
const WHERE_BUCKET: &str = "WHERE t.bucket_id = ?1";
const WHERE_STATUS: &str = "WHERE t.status = ?1";
const WHERE_ID: &str = "WHERE t.id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(super::buckets::SCHEMA_BUCKETS, [])?;
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        let priority: String = row.get(4)?;
        let status: String = row.get(5)?;
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            due_date: row.get::<_, Option<NaiveDateTime>>(3)?,
            priority: priority.parse().unwrap_or(Priority::Medium),
            status: status.parse().unwrap_or(TaskStatus::Todo),
            bucket_id: row.get(6)?,
            bucket: row.get(7)?,
            completed_at: row.get::<_, Option<NaiveDateTime>>(8)?,
            created_at: row.get(9)?,
        })
    }

    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.due_date, task.priority.as_str(), task.status.as_str(), task.bucket_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (sql, filter_params) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_BY_DUE), vec![]),
            TaskFilter::ByBucket(id) => (format!("{} {} {}", SELECT_TASKS, WHERE_BUCKET, ORDER_BY_DUE), vec![id.to_string()]),
            TaskFilter::ByStatus(status) => (
                format!("{} {} {}", SELECT_TASKS, WHERE_STATUS, ORDER_BY_DUE),
                vec![status.as_str().to_string()],
            ),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(rusqlite::params_from_iter(filter_params.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn update(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(
            UPDATE_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.due_date,
                task.priority.as_str(),
                task.status.as_str(),
                task.bucket_id,
                task.completed_at
            ],
        )?;
        Ok(())
    }

    /// Change a task's status, stamping `completed_at` on completion.
    pub fn set_status(&mut self, id: i64, status: TaskStatus) -> Result<usize> {
        let completed_at = match status {
            TaskStatus::Completed => Some(Local::now().naive_local()),
            _ => None,
        };
        let affected = self.conn.execute(UPDATE_TASK_STATUS, params![id, status.as_str(), completed_at])?;
        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }
}
