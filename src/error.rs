//! Custom error types for prsum
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the prsum application
#[derive(Error, Debug)]
pub enum PrsumError {
    /// Not running in a git repository
    #[error("This directory is not a git repository.\n\n  → Run prsum from inside the checkout your CI job cloned.")]
    NotGitRepository,

    /// Unknown provider name in API_PROVIDER or --provider
    #[error("Unsupported API provider: '{0}'.\n\n  → Set API_PROVIDER (or --provider) to 'openai' or 'gemini'.")]
    UnsupportedProvider(String),

    /// Provider API key missing from the environment
    #[error("{provider} API key is not set.\n\n  → Export {var} in the CI job environment.")]
    MissingApiKey {
        provider: &'static str,
        var: &'static str,
    },

    /// Provider returned a non-success HTTP status
    #[error("{provider} API request failed with status {status}: {body}")]
    Api {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    /// Provider response contained no generated text
    #[error("{provider} returned a response without generated text.")]
    EmptyResponse { provider: &'static str },

    /// The git diff subprocess failed
    #[error("Git diff failed: {0}")]
    DiffCommand(String),

    /// Git operation error
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// Network request error
    #[error("Network request failed: {0}\n\n  → Check the runner's network access.")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<toml::de::Error> for PrsumError {
    fn from(err: toml::de::Error) -> Self {
        PrsumError::Config(format!("invalid config file: {}", err))
    }
}

/// Result type alias using PrsumError
pub type Result<T> = std::result::Result<T, PrsumError>;
