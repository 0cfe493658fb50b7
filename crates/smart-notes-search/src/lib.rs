//! # smart-notes-search
//!
//! Fuzzy search for smart-notes.
//!
//! This crate provides:
//! - Partial-ratio string similarity (0-100) over Unicode characters
//! - `FuzzyFilter`, which applies a free-text query to a stream of notes
//!
//! ## Example
//!
//! ```ignore
//! use smart_notes_search::FuzzyFilter;
//!
//! let filter = FuzzyFilter::new(Some("meating"), Some(70))?;
//! let hits = filter.apply(repo.stream_all()).await?;
//! ```

pub mod filter;
pub mod fuzzy;

// Re-export core types
pub use smart_notes_core::*;

pub use filter::FuzzyFilter;
pub use fuzzy::{partial_ratio, ratio, MAX_SCORE};
