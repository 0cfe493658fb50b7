//! Mock generation backend for deterministic testing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use smart_notes_inference::mock::MockGenerationBackend;
//!
//! let backend = MockGenerationBackend::new().with_fixed_response("Short summary");
//! let text = backend.generate("prompt").await.unwrap();
//! assert_eq!(text, "Short summary");
//! assert_eq!(backend.generate_call_count(), 1);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use smart_notes_core::{Error, GenerationBackend, Result};

/// Mock generation backend for testing.
#[derive(Clone)]
pub struct MockGenerationBackend {
    config: Arc<MockConfig>,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[derive(Debug, Clone)]
struct MockConfig {
    model: String,
    response: String,
    failure: Option<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            model: "mock-model".to_string(),
            response: "Mock response".to_string(),
            failure: None,
        }
    }
}

impl Default for MockGenerationBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerationBackend {
    pub fn new() -> Self {
        Self {
            config: Arc::new(MockConfig::default()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the text returned by every generation request.
    pub fn with_fixed_response(mut self, response: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).response = response.into();
        self
    }

    /// Make every generation request fail with `Error::Inference(message)`.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.config).failure = Some(message.into());
        self
    }

    /// Number of generate calls made so far.
    pub fn generate_call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationBackend for MockGenerationBackend {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.config.failure {
            Some(message) => Err(Error::Inference(message.clone())),
            None => Ok(self.config.response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_response() {
        let backend = MockGenerationBackend::new();
        assert_eq!(backend.generate("x").await.unwrap(), "Mock response");
        assert_eq!(backend.model_name(), "mock-model");
    }

    #[tokio::test]
    async fn test_clones_share_call_log() {
        let backend = MockGenerationBackend::new();
        let clone = backend.clone();
        clone.generate("first").await.unwrap();
        clone.generate("second").await.unwrap();

        assert_eq!(backend.generate_call_count(), 2);
        assert_eq!(backend.last_prompt().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let backend = MockGenerationBackend::new().with_failure("boom");
        let err = backend.generate("x").await.unwrap_err();
        assert!(err.to_string().contains("boom"));
        assert_eq!(backend.generate_call_count(), 1);
    }
}
