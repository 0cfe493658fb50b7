//! # smart-notes-inference
//!
//! Text generation for smart-notes.
//!
//! This crate provides:
//! - `GeminiBackend`, a `GenerationBackend` over the Gemini `generateContent` API
//! - `Summarizer`, which turns note content into a short summary
//! - `MockGenerationBackend` for tests (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use smart_notes_inference::{GeminiBackend, GeminiConfig, Summarizer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::new(GeminiConfig {
//!         api_key: "my-key".to_string(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!     let summarizer = Summarizer::new(Arc::new(backend));
//!     let summary = summarizer.summarize("Discussed the Q3 roadmap.").await.unwrap();
//!     println!("{}", summary);
//! }
//! ```

pub mod gemini;
pub mod summarizer;

// Mock generation backend for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use smart_notes_core::*;

pub use gemini::{GeminiBackend, GeminiConfig};
pub use summarizer::{summary_prompt, Summarizer, SummaryError};
