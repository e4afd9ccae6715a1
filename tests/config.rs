#[cfg(test)]
mod tests {
    use taskmate::api::openai::OpenAiConfig;
    use taskmate::api::tavily::TavilyConfig;
    use taskmate::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_roundtrip(_ctx: &mut ConfigTestContext) {
        // Missing file reads as empty config: no providers configured
        let config = Config::read().unwrap();
        assert!(config.ai.is_none());
        assert!(config.search.is_none());

        // Saved sections come back intact
        let config = Config {
            ai: Some(OpenAiConfig {
                api_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4o-mini".to_string(),
            }),
            search: Some(TavilyConfig {
                api_url: "https://api.tavily.com/search".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        let ai = loaded.ai.expect("ai section");
        assert_eq!(ai.model, "gpt-4o-mini");
        let search = loaded.search.expect("search section");
        assert_eq!(search.api_url, "https://api.tavily.com/search");
    }
}
