//! Note summarization on top of a generation backend.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use smart_notes_core::{defaults, GenerationBackend};

/// Why a summary could not be produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// The content is empty or whitespace only; the backend was not called.
    #[error("No content to summarize")]
    EmptyContent,

    /// The backend answered with no usable text.
    #[error("Could not generate summary")]
    EmptyResponse,

    /// The backend call failed.
    #[error("AI API failed: {0}")]
    Upstream(String),
}

/// Builds the summarization prompt for `text`.
pub fn summary_prompt(text: &str) -> String {
    format!(
        "Summarize the following note content for fast and concise access of its information:\n\n'{}'.\n\ndo not exceed {} characters in the summary.",
        text,
        defaults::SUMMARY_MAX_CHARS
    )
}

/// Produces short summaries of note content.
#[derive(Clone)]
pub struct Summarizer {
    backend: Arc<dyn GenerationBackend>,
}

impl Summarizer {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Name of the model behind this summarizer.
    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    /// Summarize `text`, returning the trimmed model output.
    pub async fn summarize(&self, text: &str) -> Result<String, SummaryError> {
        if text.trim().is_empty() {
            return Err(SummaryError::EmptyContent);
        }

        let output = self
            .backend
            .generate(&summary_prompt(text))
            .await
            .map_err(|e| {
                warn!(
                    subsystem = "inference",
                    component = "summarizer",
                    model = self.backend.model_name(),
                    error = %e,
                    "Summary generation failed"
                );
                SummaryError::Upstream(e.to_string())
            })?;

        let summary = output.trim();
        if summary.is_empty() {
            return Err(SummaryError::EmptyResponse);
        }

        debug!(
            subsystem = "inference",
            component = "summarizer",
            model = self.backend.model_name(),
            summary_len = summary.chars().count(),
            "Summary generated"
        );
        Ok(summary.to_string())
    }
}
