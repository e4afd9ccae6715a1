//! Display implementation for taskmate application messages.
//!
//! Converts structured `Message` variants into the human-readable text shown
//! in the terminal. Keeping every user-facing string in one place keeps the
//! wording consistent and makes the messages easy to audit.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created successfully", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated successfully", title),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader => "Tasks".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::NoChangesDetected => "No changes detected".to_string(),

            // === BUCKET MESSAGES ===
            Message::BucketCreated(name) => format!("Bucket '{}' created successfully", name),
            Message::BucketDeleted(name) => format!("Bucket '{}' deleted", name),
            Message::BucketNotFound(name) => format!("Bucket '{}' not found", name),
            Message::BucketsNotFound => "No buckets found".to_string(),
            Message::BucketsHeader => "Buckets".to_string(),
            Message::BucketTasksDetached(count) => format!("{} task(s) detached from the deleted bucket", count),
            Message::ConfirmDeleteBucket(name) => format!("Delete bucket '{}'? Its tasks will be kept without a bucket", name),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigSaveError => "Failed to save configuration file".to_string(),

            // === ASSISTANT MESSAGES ===
            Message::DailyLimitReached(limit) => {
                format!("Daily limit reached. You can ask up to {} questions per day. Try again tomorrow!", limit)
            }
            Message::QuestionsRemaining(remaining) => format!("Questions remaining today: {}", remaining),
            Message::EmptyQuestion => "Question is required".to_string(),
            Message::AssistantNotConfigured => "No AI provider configured; answering with the built-in rules".to_string(),
            Message::EnhancingTask(title) => format!("Enhancing task '{}'...", title),

            // === CHAT HISTORY MESSAGES ===
            Message::HistoryEmpty => "No questions asked yet".to_string(),
            Message::HistoryHeader => "Chat history".to_string(),

            // === SETTINGS MESSAGES ===
            Message::SettingsSaved => "Assistant settings saved".to_string(),
            Message::SettingsHeader => "Assistant settings".to_string(),
            Message::InvalidTone(tone) => format!("Unknown tone '{}'. Expected professional, friendly or casual", tone),
        };
        write!(f, "{}", text)
    }
}
