//! Note repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::{StreamExt, TryStreamExt};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use smart_notes_core::{
    CreateNoteRequest, Error, Note, NoteRepository, NoteStream, Result, UpdateNoteRequest,
};

/// PostgreSQL implementation of NoteRepository.
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Map a database row to a Note.
fn map_row_to_note(row: PgRow) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        tags: row.get::<Vec<String>, _>("tags"),
        summary: row.get("summary"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn insert(&self, req: CreateNoteRequest, created_at: DateTime<Utc>) -> Result<Note> {
        let row = sqlx::query(
            "INSERT INTO note (title, content, tags, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, tags, summary, created_at, updated_at",
        )
        .bind(req.title)
        .bind(req.content)
        .bind(req.tags.unwrap_or_default())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        let note = map_row_to_note(row);
        debug!(
            subsystem = "db",
            component = "notes",
            op = "insert",
            note_id = %note.id,
            "Note inserted"
        );
        Ok(note)
    }

    async fn fetch(&self, id: Uuid) -> Result<Note> {
        sqlx::query(
            "SELECT id, title, content, tags, summary, created_at, updated_at
             FROM note WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .map(map_row_to_note)
        .ok_or(Error::NoteNotFound(id))
    }

    fn stream_all(&self) -> NoteStream<'_> {
        sqlx::query(
            "SELECT id, title, content, tags, summary, created_at, updated_at
             FROM note ORDER BY seq",
        )
        .fetch(&self.pool)
        .map_ok(map_row_to_note)
        .map_err(Error::Database)
        .boxed()
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, content, tags, summary, created_at, updated_at
             FROM note ORDER BY created_at DESC, seq DESC LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(map_row_to_note).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        req: UpdateNoteRequest,
        updated_at: DateTime<Utc>,
    ) -> Result<Note> {
        // NULL parameters leave the column untouched.
        let row = sqlx::query(
            "UPDATE note SET
                 title = COALESCE($2, title),
                 content = COALESCE($3, content),
                 tags = COALESCE($4, tags),
                 summary = COALESCE($5, summary),
                 updated_at = $6
             WHERE id = $1
             RETURNING id, title, content, tags, summary, created_at, updated_at",
        )
        .bind(id)
        .bind(req.title)
        .bind(req.content)
        .bind(req.tags)
        .bind(req.summary)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::NoteNotFound(id))?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "update",
            note_id = %id,
            "Note updated"
        );
        Ok(map_row_to_note(row))
    }

    async fn set_summary(
        &self,
        id: Uuid,
        summary: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Note> {
        sqlx::query(
            "UPDATE note SET summary = $2, updated_at = $3
             WHERE id = $1
             RETURNING id, title, content, tags, summary, created_at, updated_at",
        )
        .bind(id)
        .bind(summary)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .map(map_row_to_note)
        .ok_or(Error::NoteNotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM note")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "delete_all",
            result_count = result.rows_affected(),
            "All notes deleted"
        );
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(())
    }
}
