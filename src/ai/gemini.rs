//! Gemini API client

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::config::ProviderSettings;
use crate::error::{PrsumError, Result};

/// Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

const PROVIDER: &str = "Gemini";

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    endpoint: Url,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl GeminiClient {
    /// Create a new Gemini client from provider settings and an API key
    pub fn new(settings: &ProviderSettings, temperature: f32, api_key: SecretString) -> Result<Self> {
        let endpoint = settings
            .base_url(GEMINI_API_BASE)?
            .join(&format!("v1beta/models/{}:generateContent", settings.model))
            .map_err(|e| PrsumError::Config(format!("invalid Gemini endpoint: {}", e)))?;

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

    /// Issue one generateContent request and extract the generated text
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        // The key travels as a query parameter, not a bearer header
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());

        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_tokens,
            },
        };

        let response = self.client.post(url).json(&request_body).send().await?;

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
        extract_candidate_text(&body)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body
fn extract_candidate_text(body: &str) -> Result<String> {
    let parsed: GenerateResponse = serde_json::from_str(body)?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(PrsumError::EmptyResponse { provider: PROVIDER })
}

// ─────────────────────────────────────────────────────────────────────────────
// Gemini API Request/Response types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_payload_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Summarize this".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 300,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Summarize this");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 300);
        // serde_json widens f32 to f64, so compare in f32
        assert_eq!(
            json["generationConfig"]["temperature"].as_f64().unwrap() as f32,
            0.7
        );
    }

    #[test]
    fn test_extract_candidate_text() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "A summary."}]}}]}"#;
        assert_eq!(extract_candidate_text(body).unwrap(), "A summary.");
    }

    #[test]
    fn test_extract_candidate_text_empty() {
        let body = r#"{"candidates": []}"#;
        assert!(matches!(
            extract_candidate_text(body),
            Err(PrsumError::EmptyResponse { provider: "Gemini" })
        ));
    }
}
