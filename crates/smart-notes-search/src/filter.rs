//! Fuzzy note filter.
//!
//! A note matches when, for at least one query word, the best of its title,
//! content and tag scores reaches the threshold. All comparisons are made on
//! lowercased text. Thresholds are not clamped: anything at or below zero
//! matches every note, anything above 100 matches none.

use futures::TryStreamExt;
use tracing::debug;

use smart_notes_core::{defaults, Error, Note, NoteStream, Result};

use crate::fuzzy::partial_ratio;

/// Compiled filter for a single query.
#[derive(Debug, Clone)]
pub struct FuzzyFilter {
    words: Vec<String>,
    threshold: f64,
}

impl FuzzyFilter {
    /// Build a filter from raw query parameters.
    ///
    /// Fails with `InvalidInput` when `query` is missing or contains only
    /// whitespace.
    pub fn new(query: Option<&str>, threshold: Option<i32>) -> Result<Self> {
        let words: Vec<String> = query
            .unwrap_or_default()
            .to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect();
        if words.is_empty() {
            return Err(Error::InvalidInput("No Query was provided".to_string()));
        }

        let threshold = threshold.unwrap_or(i32::from(defaults::FILTER_THRESHOLD));

        Ok(Self {
            words,
            threshold: f64::from(threshold),
        })
    }

    /// Lowercased query words.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `note` satisfies the filter.
    pub fn matches(&self, note: &Note) -> bool {
        let title = note.title.to_lowercase();
        let content = note.content.to_lowercase();
        let tags: Vec<String> = note.tags.iter().map(|t| t.to_lowercase()).collect();

        self.words.iter().any(|word| {
            let tag_score = tags
                .iter()
                .map(|t| partial_ratio(word, t))
                .fold(0.0_f64, f64::max);
            let best = partial_ratio(word, &title)
                .max(partial_ratio(word, &content))
                .max(tag_score);
            best >= self.threshold
        })
    }

    /// Consume `notes` and keep the matching ones in stream order.
    pub async fn apply(&self, notes: NoteStream<'_>) -> Result<Vec<Note>> {
        let mut scanned = 0usize;
        let matched: Vec<Note> = notes
            .try_filter(|note| {
                scanned += 1;
                futures::future::ready(self.matches(note))
            })
            .try_collect()
            .await?;

        debug!(
            subsystem = "search",
            component = "fuzzy_filter",
            op = "apply",
            words = self.words.len(),
            threshold = self.threshold,
            scanned,
            result_count = matched.len(),
            "Fuzzy filter applied"
        );
        Ok(matched)
    }
}
