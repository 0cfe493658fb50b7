//! In-memory note repository.
//!
//! Keeps notes in a `Vec` in insertion order, mirroring the ordering
//! guarantees of [`PgNoteRepository`](crate::PgNoteRepository). Used by the
//! API and service tests so they run without PostgreSQL.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use uuid::Uuid;

use smart_notes_core::{
    CreateNoteRequest, Error, Note, NoteRepository, NoteStream, Result, UpdateNoteRequest,
};

/// Process-local implementation of NoteRepository.
#[derive(Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every stored note, in insertion order.
    pub fn snapshot(&self) -> Result<Vec<Note>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Note>>> {
        self.notes
            .lock()
            .map_err(|_| Error::Internal("note store lock poisoned".to_string()))
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn insert(&self, req: CreateNoteRequest, created_at: DateTime<Utc>) -> Result<Note> {
        let note = Note {
            id: Uuid::new_v4(),
            title: req.title,
            content: req.content,
            tags: req.tags.unwrap_or_default(),
            summary: None,
            created_at,
            updated_at: None,
        };
        self.lock()?.push(note.clone());
        Ok(note)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        self.lock()?
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(Error::NoteNotFound(id))
    }

    fn stream_all(&self) -> NoteStream<'_> {
        match self.lock() {
            Ok(notes) => futures::stream::iter(notes.clone().into_iter().map(Ok)).boxed(),
            Err(e) => futures::stream::once(async move { Err(e) }).boxed(),
        }
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Note>> {
        let notes = self.lock()?;
        let mut ordered: Vec<(usize, &Note)> = notes.iter().enumerate().collect();
        // Newest first; later insertion wins ties.
        ordered.sort_by(|(ia, a), (ib, b)| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| ib.cmp(ia))
        });
        Ok(ordered
            .into_iter()
            .take(limit as usize)
            .map(|(_, n)| n.clone())
            .collect())
    }

    async fn update(
        &self,
        id: Uuid,
        req: UpdateNoteRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Note> {
        let mut notes = self.lock()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;
        req.apply_to(note);
        note.updated_at = Some(updated_at);
        Ok(note.clone())
    }

    async fn set_summary(
        &self,
        id: Uuid,
        summary: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Note> {
        let mut notes = self.lock()?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;
        note.summary = Some(summary.to_string());
        note.updated_at = Some(updated_at);
        Ok(note.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let mut notes = self.lock()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut notes = self.lock()?;
        let removed = notes.len() as u64;
        notes.clear();
        Ok(removed)
    }

    async fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }
}
