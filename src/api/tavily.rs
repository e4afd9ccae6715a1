use super::{ProviderError, ProviderResult, SearchEngine};
use crate::libs::{config::ConfigModule, secret::Secret};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SECRET_FILE: &str = ".tavily_secret";
const DEFAULT_API_URL: &str = "https://api.tavily.com/search";
const SEARCH_TIMEOUT_SECS: u64 = 10;
const MAX_RESULTS: usize = 3;

#[derive(Serialize)]
struct SearchRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: &'static str,
    include_answer: bool,
    max_results: usize,
}

#[derive(Deserialize)]
struct SearchResponse {
    answer: Option<String>,
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Deserialize)]
struct SearchResult {
    title: String,
    content: String,
}

pub struct Tavily {
    client: Client,
    config: TavilyConfig,
    secret: Secret,
}

impl Tavily {
    pub fn new(config: &TavilyConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| Client::new()),
            config: config.clone(),
            secret: Secret::new(SECRET_FILE, "Enter your Tavily API key"),
        }
    }
}

impl SearchEngine for Tavily {
    /// Returns the synthesized answer when the provider produces one,
    /// otherwise the top results as `title: content` blocks. An empty
    /// string means nothing useful came back.
    async fn search(&self, query: &str) -> ProviderResult<String> {
        let api_key = self.secret.get_or_prompt().map_err(|_| ProviderError::MissingKey)?;
        let request = SearchRequest {
            api_key: &api_key,
            query,
            search_depth: "basic",
            include_answer: true,
            max_results: MAX_RESULTS,
        };

        let res = self.client.post(&self.config.api_url).json(&request).send().await?;
        if !res.status().is_success() {
            return Err(ProviderError::Status(res.status()));
        }

        let body = res.json::<SearchResponse>().await?;
        if let Some(answer) = body.answer {
            if !answer.trim().is_empty() {
                return Ok(answer);
            }
        }

        Ok(body
            .results
            .iter()
            .take(MAX_RESULTS)
            .map(|result| format!("{}: {}", result.title, result.content))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TavilyConfig {
    pub api_url: String,
}

impl TavilyConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "search".to_string(),
            name: "Tavily web search".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: DEFAULT_API_URL.to_string(),
        });
        println!("Tavily web search settings");
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the Tavily API URL")
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
