//! API key lookup
//!
//! CI jobs pass credentials through the environment, so this is a thin
//! layer over `std::env` that wraps keys in `SecretString` and turns an
//! absent key into a configuration error.
//!
//! Environment variables:
//! - `OPENAI_API_KEY` - OpenAI API key
//! - `GEMINI_API_KEY` - Gemini API key

use secrecy::{ExposeSecret, SecretString};

use crate::core::config::Provider;
use crate::error::{PrsumError, Result};

/// Read the API key for `provider` from its environment variable
pub fn api_key(provider: Provider) -> Option<SecretString> {
    match std::env::var(provider.api_key_var()) {
        Ok(key) if !key.is_empty() => Some(SecretString::from(key)),
        _ => None,
    }
}

/// Get the API key for `provider`, returning an error if not configured
pub fn require_api_key(provider: Provider) -> Result<SecretString> {
    api_key(provider).ok_or(PrsumError::MissingApiKey {
        provider: provider.display_name(),
        var: provider.api_key_var(),
    })
}

/// Get a masked version of a key for display (shows first 4 and last 4 chars)
pub fn mask_key(key: &SecretString) -> String {
    let exposed = key.expose_secret();
    if exposed.len() <= 8 {
        "*".repeat(exposed.len())
    } else {
        format!("{}...{}", &exposed[..4], &exposed[exposed.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        let short = SecretString::from("abc");
        assert_eq!(mask_key(&short), "***");

        let long = SecretString::from("sk-1234567890abcdef");
        assert_eq!(mask_key(&long), "sk-1...cdef");
    }

    // Set and unset cases share one test: the variable is process-global
    // and unit tests run in parallel.
    #[test]
    fn test_api_key_from_env() {
        std::env::remove_var("GEMINI_API_KEY");
        assert!(api_key(Provider::Gemini).is_none());
        assert!(matches!(
            require_api_key(Provider::Gemini),
            Err(PrsumError::MissingApiKey {
                var: "GEMINI_API_KEY",
                ..
            })
        ));

        std::env::set_var("GEMINI_API_KEY", "test-key-123");
        let key = require_api_key(Provider::Gemini).unwrap();
        assert_eq!(key.expose_secret(), "test-key-123");
        std::env::remove_var("GEMINI_API_KEY");
    }
}
