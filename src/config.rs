//! Environment-driven configuration.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for every generation request.
pub const MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Public Gemini API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable to override the Gemini endpoint (proxies, local mocks).
pub const BASE_URL_ENV: &str = "AI_COMMIT_GEMINI_BASE_URL";

/// Environment variable to bound the generation request, in seconds.
pub const TIMEOUT_ENV: &str = "AI_COMMIT_TIMEOUT";

/// Validated settings for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when `GEMINI_API_KEY` is
    /// unset or blank. Nothing else is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey),
        };

        Ok(Self {
            api_key,
            base_url: get_base_url(),
            timeout: get_timeout(),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &'static str {
        MODEL
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout. `None` means wait for as long as the service takes.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn get_base_url() -> String {
    match env::var(BASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

/// Read the optional request timeout.
///
/// Unset means no timeout. Invalid values (non-numeric, empty, zero) log a
/// warning and also leave the request unbounded.
fn get_timeout() -> Option<Duration> {
    let value = env::var(TIMEOUT_ENV).ok()?;
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(
                "Invalid {} value '{}', requests will not time out",
                TIMEOUT_ENV, value
            );
            None
        }
    }
}
