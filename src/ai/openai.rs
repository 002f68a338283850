//! OpenAI completions client

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::config::ProviderSettings;
use crate::error::{PrsumError, Result};

/// OpenAI API base URL
const OPENAI_API_BASE: &str = "https://api.openai.com";

const PROVIDER: &str = "OpenAI";

/// OpenAI API client
pub struct OpenAiClient {
    client: Client,
    api_key: SecretString,
    endpoint: Url,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiClient {
    /// Create a new OpenAI client from provider settings and an API key
    pub fn new(settings: &ProviderSettings, temperature: f32, api_key: SecretString) -> Result<Self> {
        let endpoint = settings
            .base_url(OPENAI_API_BASE)?
            .join("v1/completions")
            .map_err(|e| PrsumError::Config(format!("invalid OpenAI endpoint: {}", e)))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            endpoint,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature,
        })
    }

    /// Get the current model name
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Issue one completion request and extract the generated text
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request_body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PrsumError::Api {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let body = response.text().await?;
        extract_completion_text(&body)
    }
}

/// Pull `choices[0].text` out of a completions response body
fn extract_completion_text(body: &str) -> Result<String> {
    let parsed: CompletionResponse = serde_json::from_str(body)?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or(PrsumError::EmptyResponse { provider: PROVIDER })
}

// ─────────────────────────────────────────────────────────────────────────────
// OpenAI API Request/Response types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo-instruct",
            prompt: "Summarize this",
            max_tokens: 150,
            temperature: 0.7,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
        assert_eq!(json["prompt"], "Summarize this");
        assert_eq!(json["max_tokens"], 150);
        // serde_json widens f32 to f64, so compare in f32
        assert_eq!(json["temperature"].as_f64().unwrap() as f32, 0.7);
    }

    #[test]
    fn test_extract_completion_text() {
        let body = r#"{"choices": [{"text": "A tidy summary."}]}"#;
        assert_eq!(extract_completion_text(body).unwrap(), "A tidy summary.");
    }

    #[test]
    fn test_extract_completion_text_no_choices() {
        let body = r#"{"choices": []}"#;
        assert!(matches!(
            extract_completion_text(body),
            Err(PrsumError::EmptyResponse { provider: "OpenAI" })
        ));
    }

    #[test]
    fn test_extract_completion_text_malformed() {
        assert!(matches!(
            extract_completion_text("not json"),
            Err(PrsumError::Json(_))
        ));
    }
}
