//! Google Gemini generation backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use smart_notes_inference::gemini::{GeminiBackend, GeminiConfig};
//! use smart_notes_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::new(GeminiConfig {
//!         api_key: "my-key".to_string(),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//!     let text = backend.generate("Say hello").await.unwrap();
//!     println!("{}", text);
//! }
//! ```

mod backend;
mod types;

pub use backend::{GeminiBackend, GeminiConfig};
pub use types::*;
