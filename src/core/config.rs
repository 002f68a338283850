//! Provider selection and application configuration
//!
//! The provider itself comes from the environment (`API_PROVIDER`); tuning
//! knobs (model names, token limits, endpoint overrides) come from an
//! optional `config.toml` in the platform config directory.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PrsumError, Result};

/// Text-generation providers supported for summary generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    /// Parse a provider name as given in `API_PROVIDER` (case-insensitive)
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            _ => Err(PrsumError::UnsupportedProvider(name.to_string())),
        }
    }

    /// Environment variable holding this provider's API key
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::Gemini => "GEMINI_API_KEY",
        }
    }

    /// Human-readable name used in the formatted output
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Per-provider generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Model identifier sent in the request payload
    pub model: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    /// Endpoint base URL override (proxies, self-hosted gateways)
    #[serde(default)]
    pub api_base: Option<String>,
}

impl ProviderSettings {
    /// Resolve the endpoint base, validating any override from the config file
    pub fn base_url(&self, default_base: &str) -> Result<Url> {
        let raw = self.api_base.as_deref().unwrap_or(default_base);
        Url::parse(raw)
            .map_err(|e| PrsumError::Config(format!("invalid api_base '{}': {}", raw, e)))
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenAI completion settings
    #[serde(default = "default_openai")]
    pub openai: ProviderSettings,

    /// Gemini generation settings
    #[serde(default = "default_gemini")]
    pub gemini: ProviderSettings,

    /// Sampling temperature for both providers
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Diff size budget before per-file truncation kicks in
    #[serde(default = "default_max_diff_chars")]
    pub max_diff_chars: usize,
}

fn default_openai() -> ProviderSettings {
    ProviderSettings {
        model: "gpt-3.5-turbo-instruct".to_string(),
        max_tokens: 150,
        api_base: None,
    }
}

fn default_gemini() -> ProviderSettings {
    ProviderSettings {
        model: "gemini-1.5-pro-latest".to_string(),
        max_tokens: 300,
        api_base: None,
    }
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_diff_chars() -> usize {
    8000
}

impl Default for Config {
    fn default() -> Self {
        Config {
            openai: default_openai(),
            gemini: default_gemini(),
            temperature: default_temperature(),
            max_diff_chars: default_max_diff_chars(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if not present
    pub fn load() -> Result<Self> {
        let Some(config_path) = Self::config_path() else {
            // No resolvable config directory (e.g. bare CI container)
            return Ok(Config::default());
        };

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Settings for the selected provider
    pub fn settings(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::OpenAi => &self.openai,
            Provider::Gemini => &self.gemini,
        }
    }

    /// Get the configuration file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "prsum", "prsum").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
