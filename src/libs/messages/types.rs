#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted,
    TaskCompleted(String),
    TaskNotFound(i64),
    TasksNotFound,
    TasksHeader,
    ConfirmDeleteTask(String),
    NoChangesDetected,

    // === BUCKET MESSAGES ===
    BucketCreated(String),
    BucketDeleted(String),
    BucketNotFound(String),
    BucketsNotFound,
    BucketsHeader,
    BucketTasksDetached(usize),
    ConfirmDeleteBucket(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,

    // === ASSISTANT MESSAGES ===
    DailyLimitReached(u32),
    QuestionsRemaining(u32),
    EmptyQuestion,
    AssistantNotConfigured,
    EnhancingTask(String),

    // === CHAT HISTORY MESSAGES ===
    HistoryEmpty,
    HistoryHeader,

    // === SETTINGS MESSAGES ===
    SettingsSaved,
    SettingsHeader,
    InvalidTone(String),
}
