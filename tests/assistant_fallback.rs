#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use taskmate::api::{Generator, ProviderError, ProviderResult, SearchEngine};
    use taskmate::libs::assistant::{fallback_answer, fallback_enhancement, needs_web_search, Assistant};
    use taskmate::libs::settings::AiSettings;
    use taskmate::libs::task::{Priority, Task, TaskStatus};

    /// Generator that fails every call, standing in for a provider
    /// outage, timeout, or malformed response.
    struct FailingGenerator;

    impl Generator for FailingGenerator {
        async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> ProviderResult<String> {
            Err(ProviderError::EmptyResponse)
        }

        async fn complete_json(&self, _prompt: &str) -> ProviderResult<String> {
            Err(ProviderError::EmptyResponse)
        }
    }

    /// Generator that always answers with a fixed string.
    struct CannedGenerator;

    impl Generator for CannedGenerator {
        async fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> ProviderResult<String> {
            Ok("canned answer".to_string())
        }

        async fn complete_json(&self, _prompt: &str) -> ProviderResult<String> {
            Ok(r#"{"enhancedDescription": "Detailed plan", "suggestedSubtasks": ["One", "Two"], "estimatedDuration": "1 hour"}"#.to_string())
        }
    }

    struct NoSearch;

    impl SearchEngine for NoSearch {
        async fn search(&self, _query: &str) -> ProviderResult<String> {
            Ok(String::new())
        }
    }

    fn scenario() -> Vec<Task> {
        let today = Local::now().date_naive();
        let at = |date: chrono::NaiveDate| date.and_hms_opt(0, 0, 0).unwrap();
        vec![
            Task {
                id: None,
                title: "Buy milk".to_string(),
                description: None,
                due_date: Some(at(today)),
                priority: Priority::Low,
                status: TaskStatus::Todo,
                bucket_id: None,
                bucket: Some("Errands".to_string()),
                completed_at: None,
                created_at: None,
            },
            Task {
                id: None,
                title: "File taxes".to_string(),
                description: None,
                due_date: Some(at(today - Duration::days(3))),
                priority: Priority::High,
                status: TaskStatus::Todo,
                bucket_id: None,
                bucket: Some("Admin".to_string()),
                completed_at: None,
                created_at: None,
            },
        ]
    }

    // Forcing the provider to fail must yield exactly the deterministic
    // pipeline's output for the same question and task set.
    #[tokio::test]
    async fn test_failing_provider_falls_back_to_deterministic_answer() {
        let tasks = scenario();
        let settings = AiSettings::default();
        let assistant = Assistant::new(Some(FailingGenerator), None::<NoSearch>);

        for question in ["what's overdue?", "how many tasks do I have?", "tell me a joke"] {
            let answer = assistant.answer(question, &tasks, &settings).await;
            let expected = fallback_answer(question, &tasks, Local::now().date_naive());
            assert_eq!(answer, expected);
        }
    }

    #[tokio::test]
    async fn test_unconfigured_provider_uses_deterministic_answer() {
        let tasks = scenario();
        let settings = AiSettings::default();
        let assistant: Assistant<FailingGenerator, NoSearch> = Assistant::new(None, None);
        assert!(!assistant.has_generator());

        let answer = assistant.answer("what's overdue?", &tasks, &settings).await;
        assert!(answer.contains("1 overdue task(s)"));
        assert!(answer.contains("File taxes"));
        assert!(!answer.contains("Buy milk"));
    }

    #[tokio::test]
    async fn test_working_provider_answer_is_returned_unchanged() {
        let tasks = scenario();
        let settings = AiSettings::default();
        let assistant = Assistant::new(Some(CannedGenerator), None::<NoSearch>);

        let answer = assistant.answer("how many tasks do I have?", &tasks, &settings).await;
        assert_eq!(answer, "canned answer");
    }

    #[tokio::test]
    async fn test_enhancement_parses_provider_json() {
        let tasks = scenario();
        let assistant = Assistant::new(Some(CannedGenerator), None::<NoSearch>);

        let enhancement = assistant.enhance(&tasks[0]).await;
        assert_eq!(enhancement.enhanced_description, "Detailed plan");
        assert_eq!(enhancement.suggested_subtasks, vec!["One".to_string(), "Two".to_string()]);
        assert_eq!(enhancement.estimated_duration, "1 hour");
    }

    #[tokio::test]
    async fn test_enhancement_falls_back_on_provider_failure() {
        let tasks = scenario();
        let assistant = Assistant::new(Some(FailingGenerator), None::<NoSearch>);

        let enhancement = assistant.enhance(&tasks[0]).await;
        assert_eq!(enhancement, fallback_enhancement(&tasks[0]));
        assert_eq!(enhancement.suggested_subtasks.len(), 4);
        assert!(enhancement.enhanced_description.starts_with("Consider adding more details"));
    }

    #[test]
    fn test_web_search_heuristic() {
        // General knowledge questions trigger a search
        assert!(needs_web_search("how to cook pasta"));
        assert!(needs_web_search("find a recipe for lasagna"));
        assert!(needs_web_search("what is a sourdough starter"));

        // Task introspection questions never do
        assert!(!needs_web_search("what is due this week?"));
        assert!(!needs_web_search("search my tasks"));
        assert!(!needs_web_search("how to finish my high priority work"));
        assert!(!needs_web_search("show me my overdue tasks"));

        // Plain task questions do not look like knowledge requests at all
        assert!(!needs_web_search("show completed tasks"));
    }
}
