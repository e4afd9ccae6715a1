//! Configuration management for the taskmate application.
//!
//! Settings are stored as JSON in the platform data directory. Each
//! external integration is an optional module; a missing section simply
//! means the capability is off and the assistant runs on its built-in
//! rules. API keys are never written here, they live in encrypted
//! secret storage.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or defaults
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::api::openai::OpenAiConfig;
use crate::api::tavily::TavilyConfig;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display the available integrations.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<OpenAiConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<TavilyConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it
    /// does not exist yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(&config_path).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Interactive setup wizard.
    ///
    /// Presents the available integration modules, runs the init dialog
    /// for each selected one, and drops the sections that were left
    /// unselected.
    pub fn init() -> Result<Self> {
        let existing = Self::read().unwrap_or_default();
        let modules = [OpenAiConfig::module(), TavilyConfig::module()];
        let defaults = [existing.ai.is_some(), existing.search.is_some()];

        let names: Vec<&String> = modules.iter().map(|module| &module.name).collect();
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Select the integrations to configure")
            .items(&names)
            .defaults(&defaults)
            .interact()?;

        let mut config = Self::default();
        for index in selection {
            match modules[index].key.as_str() {
                "ai" => config.ai = Some(OpenAiConfig::init(&existing.ai)?),
                "search" => config.search = Some(TavilyConfig::init(&existing.search)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
