#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use taskmate::libs::assistant::{fallback_answer, query, render, Intent};
    use taskmate::libs::task::{Priority, Task, TaskStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    }

    fn midnight(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(0, 0, 0).unwrap()
    }

    fn task(title: &str, bucket: &str, due: Option<NaiveDateTime>, priority: Priority, status: TaskStatus) -> Task {
        Task {
            id: None,
            title: title.to_string(),
            description: None,
            due_date: due,
            priority,
            status,
            bucket_id: None,
            bucket: Some(bucket.to_string()),
            completed_at: None,
            created_at: None,
        }
    }

    /// The two-task scenario: an errand due today and an admin task three
    /// days late.
    fn scenario() -> Vec<Task> {
        vec![
            task("Buy milk", "Errands", Some(midnight(today())), Priority::Low, TaskStatus::Todo),
            task("File taxes", "Admin", Some(midnight(today() - Duration::days(3))), Priority::High, TaskStatus::Todo),
        ]
    }

    #[test]
    fn test_overdue_answer_names_only_the_late_task() {
        let tasks = scenario();
        let answer = fallback_answer("what's overdue?", &tasks, today());

        assert!(answer.contains("1 overdue task(s)"));
        assert!(answer.contains("File taxes"));
        assert!(!answer.contains("Buy milk"));
        assert_eq!(answer, "You have 1 overdue task(s):\n• File taxes (Admin, was due 2026-03-13)");
    }

    #[test]
    fn test_count_answer_reports_totals() {
        let tasks = scenario();
        let answer = fallback_answer("how many tasks do I have?", &tasks, today());
        assert_eq!(answer, "You have 2 total tasks: 0 completed and 2 pending.");
    }

    #[test]
    fn test_zero_case_copy() {
        let none: Vec<Task> = Vec::new();
        assert_eq!(
            render::render(Intent::DueToday, &[], &none),
            "You have no tasks due today. 🎉"
        );
        assert_eq!(
            render::render(Intent::Overdue, &[], &none),
            "You have no overdue tasks. Great job! 🎉"
        );
        assert_eq!(
            render::render(Intent::Completed, &[], &none),
            "You have no completed tasks yet. Keep going! 💪"
        );
        assert_eq!(
            render::render(Intent::Pending, &[], &none),
            "You have no pending tasks. All done! 🎉"
        );
    }

    #[test]
    fn test_missing_bucket_renders_placeholder() {
        let mut undated = task("Loose end", "x", None, Priority::Low, TaskStatus::Todo);
        undated.bucket = None;
        let tasks = vec![undated];

        let selection = query::select(Intent::Pending, &tasks, today());
        let answer = render::render(Intent::Pending, &selection, &tasks);
        assert!(answer.contains("• Loose end (No bucket)"));
    }

    #[test]
    fn test_long_listings_are_truncated_to_ten() {
        let tasks: Vec<Task> = (1..=12)
            .map(|i| task(&format!("Task {}", i), "Inbox", None, Priority::Low, TaskStatus::Todo))
            .collect();

        let selection = query::select(Intent::Pending, &tasks, today());
        let answer = render::render(Intent::Pending, &selection, &tasks);

        assert!(answer.starts_with("You have 12 pending task(s):"));
        assert!(answer.contains("Task 10"));
        assert!(!answer.contains("Task 11"));
        assert!(answer.ends_with("...and more!"));
    }

    #[test]
    fn test_week_listing_includes_due_dates() {
        let tasks = vec![task(
            "Quarterly review",
            "Work",
            Some(midnight(today() + Duration::days(4))),
            Priority::Medium,
            TaskStatus::Todo,
        )];

        let answer = fallback_answer("what's due this week?", &tasks, today());
        assert_eq!(
            answer,
            "You have 1 task(s) due this week:\n• Quarterly review (Work, 2026-03-20)"
        );
    }

    #[test]
    fn test_help_message_lists_supported_phrasings() {
        let answer = fallback_answer("tell me a joke", &[], today());
        assert!(answer.starts_with("I can help you with questions about your tasks."));
        assert!(answer.contains("\"How many tasks do I have?\""));
        assert!(answer.contains("\"What's due today?\""));
        assert!(answer.contains("\"Show completed tasks\""));
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let tasks = scenario();
        let first = fallback_answer("what's due today?", &tasks, today());
        let second = fallback_answer("what's due today?", &tasks, today());
        assert_eq!(first, second);
    }
}
