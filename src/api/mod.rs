//! API client modules for external AI providers.
//!
//! Provides the clients the assistant can be equipped with: an
//! OpenAI-compatible chat-completion generator and a Tavily-style web
//! search engine. Both are optional capabilities; the assistant checks
//! for their presence explicitly and falls back to the built-in
//! rule-based pipeline when a provider is absent or fails.
//!
//! ## Features
//!
//! - **OpenAI**: chat completions, plain and JSON-shaped
//! - **Tavily**: web search with a synthesized answer or top results
//! - **Bounded calls**: every request carries a client-level timeout
//! - **Security**: API keys live in encrypted secret storage, never in
//!   the config file

use reqwest::StatusCode;
use thiserror::Error;

// API client modules
pub mod openai;
pub mod tavily;

// Re-export configuration structs for easier access from other modules
pub use openai::{OpenAi, OpenAiConfig};
pub use tavily::{Tavily, TavilyConfig};

/// Failures a provider call can produce.
///
/// The assistant treats every variant the same way: log it and fall back
/// to the deterministic pipeline. Timeouts surface as `Request` errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned status {0}")]
    Status(StatusCode),
    #[error("provider response is missing usable content")]
    EmptyResponse,
    #[error("provider returned a malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("provider API key is unavailable")]
    MissingKey,
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Text generation capability.
#[allow(async_fn_in_trait)]
pub trait Generator {
    /// Single chat completion; one attempt, no retries.
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> ProviderResult<String>;

    /// JSON-mode completion returning the raw JSON object text.
    async fn complete_json(&self, prompt: &str) -> ProviderResult<String>;
}

/// Web search capability.
#[allow(async_fn_in_trait)]
pub trait SearchEngine {
    /// Returns formatted search context, empty when nothing useful came back.
    async fn search(&self, query: &str) -> ProviderResult<String>;
}
