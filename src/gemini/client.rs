//! Gemini API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::GeminiError;

use super::types::{GenerateContentRequest, GenerateContentResponse, api_error_message};

/// Trait for the remote text-generation call.
///
/// This abstraction allows substituting the network call in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send `prompt` to the model and return its text response.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

/// HTTP client for `models/{model}:generateContent`.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Create a client against `base_url` (no trailing slash).
    ///
    /// `timeout` of `None` waits for as long as the service takes.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GeminiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GeminiError::ClientBuild)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
            timeout,
        })
    }

    /// Create a client from validated configuration.
    pub fn from_config(config: &Config) -> Result<Self, GeminiError> {
        Self::new(
            config.api_key(),
            config.model(),
            config.base_url(),
            config.timeout(),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn request_error(&self, err: reqwest::Error) -> GeminiError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => GeminiError::Timeout(timeout.as_secs()),
            _ => GeminiError::Request(err),
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = self.endpoint();
        info!(model = %self.model, "Sending generateContent request");
        debug!(prompt_len = prompt.len(), url = %url, "Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.request_error(e))?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::InvalidResponse(e.to_string()))?;

        let text = parsed.into_text()?;
        debug!(response_len = text.len(), "Gemini response received");
        Ok(text)
    }
}
