//! Gemini backend implementation.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use smart_notes_core::{defaults, Error, GenerationBackend, Result};

use super::types::*;

/// Configuration for the Gemini backend.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL up to and including the API version segment.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::GEMINI_URL.to_string(),
            api_key: String::new(),
            model: defaults::GEN_MODEL.to_string(),
            timeout_seconds: defaults::GEN_TIMEOUT_SECS,
        }
    }
}

/// Gemini text generation backend.
pub struct GeminiBackend {
    client: Client,
    config: GeminiConfig,
}

impl GeminiBackend {
    /// Create a new backend with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Inference(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            subsystem = "inference",
            component = "gemini",
            model = %config.model,
            base_url = %config.base_url,
            timeout_secs = config.timeout_seconds,
            "Initializing Gemini backend"
        );

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let start = Instant::now();
        debug!(
            subsystem = "inference",
            component = "gemini",
            op = "generate",
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Generating content"
        );

        let response = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| Error::Inference(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<GeminiErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Inference(format!(
                "Gemini returned {}: {}",
                status, message
            )));
        }

        let result: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Inference(format!("Failed to parse response: {}", e)))?;

        let text = result.text().ok_or_else(|| {
            Error::Inference(format!(
                "Gemini returned no candidates for model {}",
                self.config.model
            ))
        })?;
        debug!(
            subsystem = "inference",
            component = "gemini",
            op = "generate",
            model = %self.config.model,
            response_len = text.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Generation complete"
        );
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
