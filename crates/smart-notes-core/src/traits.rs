//! Core traits for smart-notes abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Lazy sequence of notes in store-native order.
pub type NoteStream<'a> = BoxStream<'a, Result<Note>>;

/// Repository for note CRUD operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note. The store assigns the id.
    async fn insert(&self, req: CreateNoteRequest, created_at: DateTime<Utc>) -> Result<Note>;

    /// Fetch a note by ID.
    async fn fetch(&self, id: Uuid) -> Result<Note>;

    /// Stream every note in insertion order.
    ///
    /// Each call starts a fresh scan, so re-streaming observes current state.
    fn stream_all(&self) -> NoteStream<'_>;

    /// The `limit` most recently created notes, newest first.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Note>>;

    /// Apply the provided fields and set `updated_at`. Returns the updated note.
    async fn update(
        &self,
        id: Uuid,
        req: UpdateNoteRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Note>;

    /// Store a summary and set `updated_at`. Returns the updated note.
    async fn set_summary(
        &self,
        id: Uuid,
        summary: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Note>;

    /// Permanently delete a note.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Delete every note, returning how many were removed.
    async fn delete_all(&self) -> Result<u64>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<()>;
}

// =============================================================================
// INFERENCE TRAITS
// =============================================================================

/// Backend for text generation (LLM).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}
