use super::intent::Intent;
use super::query;
use crate::libs::task::Task;

/// Long listings are cut at this many bullets.
const LIST_LIMIT: usize = 10;
const DATE_FORMAT: &str = "%Y-%m-%d";

const HELP_MESSAGE: &str = "I can help you with questions about your tasks. Try asking:\n\n\
• \"How many tasks do I have?\"\n\
• \"What's due today?\"\n\
• \"What's due this week?\"\n\
• \"Show me high-priority tasks\"\n\
• \"Do I have overdue tasks?\"\n\
• \"Show completed tasks\"\n\
• \"What tasks are pending?\"";

/// Renders the answer for an intent over its selected tasks.
///
/// Deterministic templates; this is the assistant's non-AI fallback, so
/// the output must be identical whether it is called directly or after a
/// failed provider call. `tasks` is the full list, used only by `Count`.
pub fn render(intent: Intent, selection: &[Task], tasks: &[Task]) -> String {
    match intent {
        Intent::Count => {
            let (total, completed, pending) = query::count_summary(tasks);
            format!("You have {} total tasks: {} completed and {} pending.", total, completed, pending)
        }
        Intent::DueToday => {
            if selection.is_empty() {
                "You have no tasks due today. 🎉".to_string()
            } else {
                format!("You have {} task(s) due today:\n{}", selection.len(), bullet_list(selection))
            }
        }
        Intent::DueTomorrow => {
            if selection.is_empty() {
                "You have no tasks due tomorrow. 🎉".to_string()
            } else {
                format!("You have {} task(s) due tomorrow:\n{}", selection.len(), bullet_list(selection))
            }
        }
        Intent::DueThisWeek => {
            if selection.is_empty() {
                "You have no tasks due this week. 🎉".to_string()
            } else {
                format!(
                    "You have {} task(s) due this week:\n{}",
                    selection.len(),
                    bullet_list_with_due(selection, "")
                )
            }
        }
        Intent::HighPriority => {
            if selection.is_empty() {
                "You have no high-priority tasks. Great! 🎉".to_string()
            } else {
                format!("You have {} high-priority task(s):\n{}", selection.len(), bullet_list(selection))
            }
        }
        Intent::Overdue => {
            if selection.is_empty() {
                "You have no overdue tasks. Great job! 🎉".to_string()
            } else {
                format!(
                    "You have {} overdue task(s):\n{}",
                    selection.len(),
                    bullet_list_with_due(selection, "was due ")
                )
            }
        }
        Intent::Completed => {
            if selection.is_empty() {
                "You have no completed tasks yet. Keep going! 💪".to_string()
            } else {
                format!("You have completed {} task(s):\n{}", selection.len(), truncated_bullet_list(selection))
            }
        }
        Intent::Pending => {
            if selection.is_empty() {
                "You have no pending tasks. All done! 🎉".to_string()
            } else {
                format!("You have {} pending task(s):\n{}", selection.len(), truncated_bullet_list(selection))
            }
        }
        Intent::HelpDefault => HELP_MESSAGE.to_string(),
    }
}

fn bullet_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(|task| format!("• {} ({})", task.title, task.bucket_label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bullet_list_with_due(tasks: &[Task], due_prefix: &str) -> String {
    tasks
        .iter()
        .map(|task| match task.due_date {
            Some(due) => format!("• {} ({}, {}{})", task.title, task.bucket_label(), due_prefix, due.format(DATE_FORMAT)),
            None => format!("• {} ({})", task.title, task.bucket_label()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncated_bullet_list(tasks: &[Task]) -> String {
    let shown = bullet_list(&tasks[..tasks.len().min(LIST_LIMIT)]);
    if tasks.len() > LIST_LIMIT {
        format!("{}\n...and more!", shown)
    } else {
        shown
    }
}
