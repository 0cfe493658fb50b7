//! Core data models for smart-notes.
//!
//! These types are shared across all smart-notes crates and represent
//! the core domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier.
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// AI-generated summary, absent until a summarize succeeds.
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Absent until the first mutation.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// The stored summary, treating an empty string the same as no summary.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.is_empty())
    }
}

/// Request for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Partial update of a note.
///
/// Only fields set to `Some` are applied. An omitted field and an explicit
/// `null` are treated identically, so fields cannot be cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl UpdateNoteRequest {
    /// True if the request carries no field to apply.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.summary.is_none()
    }

    /// Apply the provided fields to `note` in place.
    pub fn apply_to(&self, note: &mut Note) {
        if let Some(title) = &self.title {
            note.title = title.clone();
        }
        if let Some(content) = &self.content {
            note.content = content.clone();
        }
        if let Some(tags) = &self.tags {
            note.tags = tags.clone();
        }
        if let Some(summary) = &self.summary {
            note.summary = Some(summary.clone());
        }
    }
}
