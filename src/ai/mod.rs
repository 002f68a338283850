//! AI integration module
//!
//! Provider-dispatched clients for generating PR summaries from diffs.

pub mod gemini;
pub mod openai;
pub mod prompts;

use secrecy::SecretString;

use crate::core::config::{Config, Provider};
use crate::error::Result;

pub use gemini::GeminiClient;
pub use openai::OpenAiClient;

/// Client for the selected provider
pub enum SummaryClient {
    OpenAi(OpenAiClient),
    Gemini(GeminiClient),
}

impl SummaryClient {
    /// Build the client for `provider` from configuration and credentials
    pub fn new(provider: Provider, config: &Config, api_key: SecretString) -> Result<Self> {
        let settings = config.settings(provider);

        match provider {
            Provider::OpenAi => Ok(SummaryClient::OpenAi(OpenAiClient::new(
                settings,
                config.temperature,
                api_key,
            )?)),
            Provider::Gemini => Ok(SummaryClient::Gemini(GeminiClient::new(
                settings,
                config.temperature,
                api_key,
            )?)),
        }
    }

    /// Get the current model name
    pub fn model_name(&self) -> &str {
        match self {
            SummaryClient::OpenAi(client) => client.model_name(),
            SummaryClient::Gemini(client) => client.model_name(),
        }
    }

    /// Generate a summary for a diff: one prompt, one request
    pub async fn generate_summary(&self, diff: &str, max_diff_chars: usize) -> Result<String> {
        let fitted = prompts::fit_diff(diff, max_diff_chars);
        let prompt = prompts::summary_prompt(&fitted);

        let text = match self {
            SummaryClient::OpenAi(client) => client.generate(&prompt).await?,
            SummaryClient::Gemini(client) => client.generate(&prompt).await?,
        };

        Ok(text.trim().to_string())
    }
}
