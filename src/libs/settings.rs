use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ASSISTANT_NAME: &str = "AI Assistant";

/// Response tone for the AI assistant.
///
/// Each tone maps to one fixed instruction string embedded into the
/// system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Friendly,
    Casual,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
        }
    }

    /// The instruction sentence injected into the system prompt.
    pub fn instruction(&self) -> &'static str {
        match self {
            Tone::Professional => "Respond in a professional, clear, and concise manner. Use formal language and be direct in your responses.",
            Tone::Friendly => "Respond in a warm, friendly, and encouraging manner. Use a conversational tone while staying helpful and supportive.",
            Tone::Casual => "Respond in a casual, relaxed manner. Use simple language, occasional emojis, and be conversational like talking to a friend.",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "casual" => Ok(Tone::Casual),
            other => Err(anyhow!("Unknown tone '{}'", other)),
        }
    }
}

/// Per-user assistant settings, lazily created with defaults on first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSettings {
    pub assistant_name: String,
    pub tone: Tone,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            tone: Tone::Professional,
        }
    }
}
