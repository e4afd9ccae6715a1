#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use taskmate::libs::assistant::query::{count_summary, select};
    use taskmate::libs::assistant::Intent;
    use taskmate::libs::task::{Priority, Task, TaskStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    }

    fn midnight(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(0, 0, 0).unwrap()
    }

    fn task(title: &str, due: Option<NaiveDateTime>, priority: Priority, status: TaskStatus) -> Task {
        Task {
            id: None,
            title: title.to_string(),
            description: None,
            due_date: due,
            priority,
            status,
            bucket_id: None,
            bucket: Some("Inbox".to_string()),
            completed_at: None,
            created_at: None,
        }
    }

    #[test]
    fn test_due_today_includes_midnight_and_excludes_next_day() {
        let tasks = vec![
            task("At midnight", Some(midnight(today())), Priority::Low, TaskStatus::Todo),
            task("During the day", Some(today().and_hms_opt(17, 30, 0).unwrap()), Priority::Low, TaskStatus::Todo),
            task("Exactly 24h later", Some(midnight(today()) + Duration::hours(24)), Priority::Low, TaskStatus::Todo),
            task("Undated", None, Priority::Low, TaskStatus::Todo),
        ];

        let selected = select(Intent::DueToday, &tasks, today());
        let titles: Vec<&str> = selected.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["At midnight", "During the day"]);

        // The +24h task belongs to tomorrow instead
        let tomorrow = select(Intent::DueTomorrow, &tasks, today());
        assert_eq!(tomorrow.len(), 1);
        assert_eq!(tomorrow[0].title, "Exactly 24h later");
    }

    #[test]
    fn test_due_this_week_upper_bound_is_inclusive() {
        let tasks = vec![
            task("Seventh day", Some(midnight(today() + Duration::days(7))), Priority::Low, TaskStatus::Todo),
            task("Eighth day", Some(midnight(today() + Duration::days(8))), Priority::Low, TaskStatus::Todo),
            task("Yesterday", Some(midnight(today() - Duration::days(1))), Priority::Low, TaskStatus::Todo),
        ];

        let selected = select(Intent::DueThisWeek, &tasks, today());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Seventh day");
    }

    #[test]
    fn test_overdue_never_includes_completed_tasks() {
        let tasks = vec![
            task("Late and open", Some(midnight(today() - Duration::days(3))), Priority::Low, TaskStatus::Todo),
            task("Late but completed", Some(midnight(today() - Duration::days(30))), Priority::High, TaskStatus::Completed),
            task("Due later today", Some(today().and_hms_opt(23, 0, 0).unwrap()), Priority::Low, TaskStatus::Todo),
        ];

        let selected = select(Intent::Overdue, &tasks, today());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Late and open");
    }

    #[test]
    fn test_high_priority_excludes_completed() {
        let tasks = vec![
            task("Urgent open", None, Priority::High, TaskStatus::InProgress),
            task("Urgent done", None, Priority::High, TaskStatus::Completed),
            task("Calm open", None, Priority::Medium, TaskStatus::Todo),
        ];

        let selected = select(Intent::HighPriority, &tasks, today());
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Urgent open");
    }

    #[test]
    fn test_undated_tasks_are_excluded_from_date_buckets() {
        let tasks = vec![task("Undated", None, Priority::High, TaskStatus::Todo)];

        for intent in [Intent::DueToday, Intent::DueTomorrow, Intent::DueThisWeek, Intent::Overdue] {
            assert!(select(intent, &tasks, today()).is_empty());
        }
        // Still visible to status-based selections
        assert_eq!(select(Intent::Pending, &tasks, today()).len(), 1);
    }

    #[test]
    fn test_count_summary_is_consistent() {
        let tasks = vec![
            task("A", None, Priority::Low, TaskStatus::Todo),
            task("B", None, Priority::Low, TaskStatus::InProgress),
            task("C", None, Priority::Low, TaskStatus::Completed),
        ];

        let (total, completed, pending) = count_summary(&tasks);
        assert_eq!(total, tasks.len());
        assert_eq!(completed, 1);
        assert_eq!(completed + pending, total);
    }

    #[test]
    fn test_select_does_not_mutate_input() {
        let tasks = vec![
            task("A", Some(midnight(today())), Priority::High, TaskStatus::Todo),
            task("B", Some(midnight(today() - Duration::days(1))), Priority::Low, TaskStatus::Todo),
        ];

        let first = select(Intent::Overdue, &tasks, today());
        let second = select(Intent::Overdue, &tasks, today());
        assert_eq!(first.len(), second.len());
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "A");
    }
}
