//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PLANORA_API_BASE_URL` - Base URL of the Planora backend (e.g., `https://api.planora.app`)
//! - `PLANORA_API_KEY` - Project API key sent with every request
//! - `PLANORA_PROJECT_ID` - Backend project identifier
//!
//! ## Optional
//! - `PLANORA_API_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_API_KEY_LENGTH: usize = 16;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Connection settings for the Planora backend.
///
/// The API key is held in a [`SecretString`] and redacted from `Debug`
/// output.
#[derive(Clone)]
pub struct BackendConfig {
    /// Base URL of the backend.
    pub base_url: Url,
    /// Project API key.
    pub api_key: SecretString,
    /// Backend project identifier.
    pub project_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[REDACTED]")
            .field("project_id", &self.project_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BackendConfig {
    /// Load the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, the base URL or
    /// timeout does not parse, or the API key looks like a placeholder.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = require_env("PLANORA_API_BASE_URL")?;
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("PLANORA_API_BASE_URL".to_string(), e.to_string())
        })?;

        let api_key = require_env("PLANORA_API_KEY")?;
        validate_api_key("PLANORA_API_KEY", &api_key)?;

        let project_id = require_env("PLANORA_PROJECT_ID")?;
        if project_id.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "PLANORA_PROJECT_ID".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let timeout_secs = match std::env::var("PLANORA_API_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("PLANORA_API_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key: SecretString::from(api_key),
            project_id,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Expose the API key for request construction.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reject API keys that are too short or look like placeholders.
fn validate_api_key(name: &str, value: &str) -> Result<(), ConfigError> {
    if value.len() < MIN_API_KEY_LENGTH {
        return Err(ConfigError::InsecureSecret(
            name.to_string(),
            format!("must be at least {MIN_API_KEY_LENGTH} characters"),
        ));
    }

    let lowered = value.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lowered.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                name.to_string(),
                format!("contains placeholder pattern '{pattern}'"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key_accepts_real_keys() {
        assert!(validate_api_key("K", "pk_live_4f8a2c9d1e7b6035").is_ok());
    }

    #[test]
    fn test_validate_api_key_rejects_short_keys() {
        let err = validate_api_key("K", "short").expect_err("short key must fail");
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_api_key_rejects_placeholders() {
        for key in [
            "your-api-key-goes-here",
            "CHANGEME-0123456789abcdef",
            "example-key-0123456789",
        ] {
            assert!(
                validate_api_key("K", key).is_err(),
                "placeholder accepted: {key}"
            );
        }
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = BackendConfig {
            base_url: Url::parse("https://api.planora.app").expect("valid url"),
            api_key: SecretString::from("pk_live_4f8a2c9d1e7b6035".to_string()),
            project_id: "demo".to_string(),
            timeout: Duration::from_secs(30),
        };

        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("pk_live"));
    }
}
