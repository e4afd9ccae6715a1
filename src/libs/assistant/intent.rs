/// Query intents the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Count,
    DueToday,
    DueTomorrow,
    DueThisWeek,
    HighPriority,
    Overdue,
    Completed,
    Pending,
    /// No pattern matched; answered with the usage message.
    HelpDefault,
}

// Pattern groups are tested in declaration order and the first group with
// a match decides the intent. "what high-priority tasks are overdue"
// therefore classifies as HighPriority, never Overdue.
const PATTERNS: &[(Intent, &[&str])] = &[
    (Intent::Count, &["how many", "total", "count", "all task"]),
    (Intent::DueToday, &["today", "due today"]),
    (Intent::DueTomorrow, &["tomorrow", "due tomorrow"]),
    (Intent::DueThisWeek, &["week", "this week", "next 7 days"]),
    (Intent::HighPriority, &["high", "priority", "urgent", "important"]),
    (Intent::Overdue, &["overdue", "late", "past due"]),
    (Intent::Completed, &["completed", "done", "finished"]),
    (Intent::Pending, &["pending", "todo", "not done", "incomplete"]),
];

/// Maps a free-text question to an intent.
///
/// Total over arbitrary input: anything unrecognized, including the empty
/// string, yields `HelpDefault` rather than an error.
pub fn classify(question: &str) -> Intent {
    let question = question.trim().to_lowercase();
    for (intent, patterns) in PATTERNS {
        if patterns.iter().any(|pattern| question.contains(pattern)) {
            return *intent;
        }
    }
    Intent::HelpDefault
}
