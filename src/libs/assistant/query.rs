use super::intent::Intent;
use crate::libs::task::{Priority, Task};
use chrono::{Duration, NaiveDate};

/// Selects the task subset an intent refers to.
///
/// Pure projection over the task list: no mutation, no clock access (the
/// reference day is passed in), no ordering changes. `Count` and
/// `HelpDefault` select nothing; the renderer derives their content.
pub fn select(intent: Intent, tasks: &[Task], today: NaiveDate) -> Vec<Task> {
    match intent {
        Intent::Count | Intent::HelpDefault => Vec::new(),
        Intent::DueToday => due_on(tasks, today),
        Intent::DueTomorrow => due_on(tasks, today + Duration::days(1)),
        Intent::DueThisWeek => {
            // Inclusive upper bound: a task due exactly seven days out at
            // midnight still counts as "this week".
            let start = today.and_hms_opt(0, 0, 0).unwrap();
            let end = (today + Duration::days(7)).and_hms_opt(0, 0, 0).unwrap();
            tasks
                .iter()
                .filter(|task| task.due_date.map_or(false, |due| due >= start && due <= end))
                .cloned()
                .collect()
        }
        Intent::HighPriority => tasks
            .iter()
            .filter(|task| task.priority == Priority::High && !task.is_completed())
            .cloned()
            .collect(),
        Intent::Overdue => tasks
            .iter()
            .filter(|task| !task.is_completed() && task.due_date.map_or(false, |due| due.date() < today))
            .cloned()
            .collect(),
        Intent::Completed => tasks.iter().filter(|task| task.is_completed()).cloned().collect(),
        Intent::Pending => tasks.iter().filter(|task| !task.is_completed()).cloned().collect(),
    }
}

/// Tasks whose due date falls on the given calendar day.
fn due_on(tasks: &[Task], day: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.due_date.map_or(false, |due| due.date() == day))
        .cloned()
        .collect()
}

/// Totals for the count intent: `(total, completed, pending)`.
pub fn count_summary(tasks: &[Task]) -> (usize, usize, usize) {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.is_completed()).count();
    (total, completed, total - completed)
}
