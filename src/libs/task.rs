use anyhow::anyhow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(anyhow!("Unknown priority '{}'. Expected low, medium or high", other)),
        }
    }
}

/// Task completion status.
///
/// `Completed` is terminal for the assistant's "pending" category; the
/// other two both count as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "in_progress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            other => Err(anyhow!("Unknown status '{}'. Expected todo, in-progress or completed", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub bucket_id: Option<i64>,
    /// Bucket name joined in at fetch time; display only.
    pub bucket: Option<String>,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: Option<String>,
}

impl Task {
    pub fn new(title: &str, description: Option<String>, due_date: Option<NaiveDateTime>, priority: Priority, bucket_id: Option<i64>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description,
            due_date,
            priority,
            status: TaskStatus::Todo,
            bucket_id,
            bucket: None,
            completed_at: None,
            created_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Bucket name used in rendered answers and prompts.
    pub fn bucket_label(&self) -> &str {
        self.bucket.as_deref().unwrap_or("No bucket")
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByBucket(i64),
    ByStatus(TaskStatus),
}
