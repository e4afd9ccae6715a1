use super::{Generator, ProviderError, ProviderResult};
use crate::libs::{config::ConfigModule, secret::Secret};
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SECRET_FILE: &str = ".openai_secret";
const COMPLETIONS_URL: &str = "chat/completions";
const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
// Generation calls must never hang the CLI; a timed-out call is treated
// like any other provider failure.
const GENERATION_TIMEOUT_SECS: u64 = 30;
const TEMPERATURE: f32 = 0.7;
const MAX_ANSWER_TOKENS: u32 = 500;
const MAX_ENHANCE_TOKENS: u32 = 600;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct OpenAi {
    client: Client,
    config: OpenAiConfig,
    secret: Secret,
}

impl OpenAi {
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(GENERATION_TIMEOUT_SECS))
                .build()
                .unwrap_or_else(|_| Client::new()),
            config: config.clone(),
            secret: Secret::new(SECRET_FILE, "Enter your OpenAI API key"),
        }
    }

    async fn chat(&self, request: &ChatRequest<'_>) -> ProviderResult<String> {
        let api_key = self.secret.get_or_prompt().map_err(|_| ProviderError::MissingKey)?;
        let url = format!("{}/{}", self.config.api_url, COMPLETIONS_URL);

        let res = self.client.post(url).bearer_auth(api_key).json(request).send().await?;
        if !res.status().is_success() {
            return Err(ProviderError::Status(res.status()));
        }

        let body = res.json::<ChatResponse>().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}

impl Generator for OpenAi {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> ProviderResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_ANSWER_TOKENS,
            response_format: None,
        };
        self.chat(&request).await
    }

    async fn complete_json(&self, prompt: &str) -> ProviderResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            temperature: TEMPERATURE,
            max_tokens: MAX_ENHANCE_TOKENS,
            response_format: Some(ResponseFormat { kind: "json_object" }),
        };
        self.chat(&request).await
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OpenAiConfig {
    pub api_url: String,
    pub model: String,
}

impl OpenAiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "ai".to_string(),
            name: "OpenAI assistant".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        });
        println!("OpenAI assistant settings");
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the OpenAI-compatible API URL")
                .default(config.api_url)
                .interact_text()?,
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the model name")
                .default(config.model)
                .interact_text()?,
        })
    }
}
