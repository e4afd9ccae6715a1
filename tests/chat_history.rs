#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use taskmate::db::chat_history::{ChatHistory, MAX_MESSAGE_LEN, MAX_RESPONSE_LEN, RETENTION_LIMIT};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ChatTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ChatTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ChatTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ChatTestContext)]
    #[test]
    fn test_chat_history_workflow(_ctx: &mut ChatTestContext) {
        let mut history = ChatHistory::new().unwrap();

        // Append and read back, newest first
        history.append("how many tasks?", "You have 2 total tasks: 0 completed and 2 pending.").unwrap();
        history.append("what's due today?", "You have no tasks due today. 🎉").unwrap();

        let recent = history.recent(10).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message, "what's due today?");
        assert_eq!(recent[1].message, "how many tasks?");
        assert!(recent[0].created_at.is_some());

        // Today's records count against the quota window
        let start_of_today = Local::now().date_naive().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(history.count_since(start_of_today).unwrap(), 2);
        // A future lower bound excludes them
        let tomorrow = start_of_today + Duration::days(1);
        assert_eq!(history.count_since(tomorrow).unwrap(), 0);

        // Oversized fields are clamped at the storage boundary
        let long_question = "q".repeat(MAX_MESSAGE_LEN + 50);
        let long_answer = "a".repeat(MAX_RESPONSE_LEN + 50);
        history.append(&long_question, &long_answer).unwrap();

        let recent = history.recent(1).unwrap();
        assert_eq!(recent[0].message.chars().count(), MAX_MESSAGE_LEN);
        assert_eq!(recent[0].response.chars().count(), MAX_RESPONSE_LEN);

        // Retention keeps only the most recent records
        for i in 0..(RETENTION_LIMIT + 10) {
            history.append(&format!("question {}", i), "answer").unwrap();
        }
        let all = history.recent(RETENTION_LIMIT * 2).unwrap();
        assert_eq!(all.len(), RETENTION_LIMIT);
        // The newest survives, the oldest are gone
        assert_eq!(all[0].message, format!("question {}", RETENTION_LIMIT + 9));
        assert!(all.iter().all(|record| record.message != "how many tasks?"));
    }
}
