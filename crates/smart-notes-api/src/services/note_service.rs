//! Note orchestration: store access, fuzzy filtering and summarization.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use smart_notes_core::{
    defaults, CreateNoteRequest, Error, Note, NoteRepository, NoteStream, Result,
    UpdateNoteRequest,
};
use smart_notes_inference::{Summarizer, SummaryError};
use smart_notes_search::FuzzyFilter;

/// Parse a path identifier. Anything that is not a UUID cannot name a note.
pub fn parse_note_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| Error::NotFound("Note not found".to_string()))
}

/// Service owning the note store and the summarizer.
pub struct NoteService {
    repo: Arc<dyn NoteRepository>,
    summarizer: Summarizer,
}

impl NoteService {
    pub fn new(repo: Arc<dyn NoteRepository>, summarizer: Summarizer) -> Self {
        Self { repo, summarizer }
    }

    pub async fn create(&self, req: CreateNoteRequest) -> Result<Note> {
        let note = self.repo.insert(req, Utc::now()).await?;
        info!(
            subsystem = "api",
            component = "notes",
            op = "create",
            note_id = %note.id,
            tag_count = note.tags.len(),
            "Note created"
        );
        Ok(note)
    }

    pub async fn get(&self, id: Uuid) -> Result<Note> {
        self.repo.fetch(id).await
    }

    /// Every note in store order. Each call starts a new scan.
    pub fn list_all(&self) -> NoteStream<'_> {
        self.repo.stream_all()
    }

    /// Apply a partial update. Fails with `InvalidInput` when no field is set.
    pub async fn update(&self, id: Uuid, req: UpdateNoteRequest) -> Result<Note> {
        if req.is_empty() {
            return Err(Error::InvalidInput("No fields to update".to_string()));
        }
        let note = self.repo.update(id, req, Utc::now()).await?;
        info!(
            subsystem = "api",
            component = "notes",
            op = "update",
            note_id = %id,
            "Note updated"
        );
        Ok(note)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        self.repo.delete(id).await?;
        info!(
            subsystem = "api",
            component = "notes",
            op = "delete",
            note_id = %id,
            "Note deleted"
        );
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let removed = self.repo.delete_all().await?;
        warn!(
            subsystem = "api",
            component = "notes",
            op = "delete_all",
            result_count = removed,
            "All notes deleted"
        );
        Ok(removed)
    }

    /// Fuzzy search over every stored note.
    ///
    /// `tag` is only logged; it never narrows the candidates.
    pub async fn filter(
        &self,
        query: Option<&str>,
        tag: Option<&str>,
        threshold: Option<i32>,
    ) -> Result<Vec<Note>> {
        let start = Instant::now();
        let filter = FuzzyFilter::new(query, threshold)?;
        let notes = filter.apply(self.repo.stream_all()).await?;

        debug!(
            subsystem = "api",
            component = "notes",
            op = "filter",
            tag,
            result_count = notes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Filter complete"
        );
        Ok(notes)
    }

    pub async fn recent(&self, limit: Option<u32>) -> Result<Vec<Note>> {
        self.repo
            .list_recent(limit.unwrap_or(defaults::RECENT_LIMIT))
            .await
    }

    /// Generate a summary for the note's content and store it.
    ///
    /// The note is left untouched when summarization fails.
    pub async fn summarize(&self, id: Uuid) -> Result<Note> {
        let start = Instant::now();
        let note = self.repo.fetch(id).await?;

        let summary = self
            .summarizer
            .summarize(&note.content)
            .await
            .map_err(|e| match e {
                SummaryError::EmptyContent => Error::InvalidInput(e.to_string()),
                SummaryError::EmptyResponse => Error::Internal(e.to_string()),
                SummaryError::Upstream(_) => Error::Upstream("AI API failed".to_string()),
            })?;

        let updated = self.repo.set_summary(id, &summary, Utc::now()).await?;
        info!(
            subsystem = "api",
            component = "notes",
            op = "summarize",
            note_id = %id,
            model = self.summarizer.model_name(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note summarized"
        );
        Ok(updated)
    }

    /// The stored summary. Missing and empty summaries are both not found.
    pub async fn get_summary(&self, id: Uuid) -> Result<String> {
        let note = self.repo.fetch(id).await?;
        note.summary_text()
            .map(String::from)
            .ok_or_else(|| Error::NotFound("Summary not found".to_string()))
    }

    /// Check that the note store is reachable.
    pub async fn health(&self) -> Result<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use smart_notes_db::InMemoryNoteRepository;
    use smart_notes_inference::mock::MockGenerationBackend;

    fn service_with(mock: MockGenerationBackend) -> (NoteService, InMemoryNoteRepository) {
        let repo = InMemoryNoteRepository::new();
        let service = NoteService::new(
            Arc::new(repo.clone()),
            Summarizer::new(Arc::new(mock)),
        );
        (service, repo)
    }

    fn create_req(title: &str, content: &str) -> CreateNoteRequest {
        CreateNoteRequest {
            title: title.to_string(),
            content: content.to_string(),
            tags: None,
        }
    }

    #[test]
    fn test_parse_note_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_note_id(&id.to_string()).unwrap(), id);
        assert!(parse_note_id("not-a-uuid").unwrap_err().is_not_found());
        assert!(parse_note_id("").unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (service, _) = service_with(MockGenerationBackend::new());
        let note = service.create(create_req("Hello", "World")).await.unwrap();

        assert_eq!(service.get(note.id).await.unwrap(), note);
        assert!(note.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_list_all_in_creation_order() {
        let (service, _) = service_with(MockGenerationBackend::new());
        service.create(create_req("one", "x")).await.unwrap();
        service.create(create_req("two", "x")).await.unwrap();

        let notes: Vec<Note> = service.list_all().try_collect().await.unwrap();
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_empty_update_rejected() {
        let (service, _) = service_with(MockGenerationBackend::new());
        let note = service.create(create_req("a", "b")).await.unwrap();

        let err = service
            .update(note.id, UpdateNoteRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        // Also for unknown ids: emptiness is checked first.
        let err = service
            .update(Uuid::new_v4(), UpdateNoteRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_sets_updated_at() {
        let (service, _) = service_with(MockGenerationBackend::new());
        let note = service.create(create_req("a", "b")).await.unwrap();

        let updated = service
            .update(
                note.id,
                UpdateNoteRequest {
                    title: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.content, "b");
        assert!(updated.updated_at.unwrap() >= updated.created_at);
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let (service, _) = service_with(MockGenerationBackend::new());
        let note = service.create(create_req("a", "b")).await.unwrap();

        service.delete(note.id).await.unwrap();
        assert!(service.get(note.id).await.unwrap_err().is_not_found());
        assert!(service.delete(note.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_all_on_empty_store() {
        let (service, repo) = service_with(MockGenerationBackend::new());
        assert_eq!(service.delete_all().await.unwrap(), 0);
        assert!(repo.snapshot().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_requires_query() {
        let (service, _) = service_with(MockGenerationBackend::new());
        let err = service.filter(None, Some("work"), Some(10)).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_filter_typo() {
        let (service, _) = service_with(MockGenerationBackend::new());
        service
            .create(create_req("Meeting Notes", "Discuss roadmap"))
            .await
            .unwrap();
        service
            .create(create_req("Grocery List", "milk, bread"))
            .await
            .unwrap();

        let hits = service.filter(Some("meating"), None, Some(70)).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Meeting Notes");
    }

    #[tokio::test]
    async fn test_filter_tag_does_not_narrow_results() {
        let (service, _) = service_with(MockGenerationBackend::new());
        service
            .create(create_req("Meeting Notes", "Discuss roadmap"))
            .await
            .unwrap();

        let untagged = service.filter(Some("meeting"), None, None).await.unwrap();
        let tagged = service
            .filter(Some("meeting"), Some("work"), None)
            .await
            .unwrap();
        assert_eq!(untagged.len(), 1);
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].id, untagged[0].id);
    }

    #[tokio::test]
    async fn test_recent_defaults_to_25() {
        let (service, _) = service_with(MockGenerationBackend::new());
        for i in 0..30 {
            service
                .create(create_req(&format!("n{}", i), "x"))
                .await
                .unwrap();
        }
        let recent = service.recent(None).await.unwrap();
        assert_eq!(recent.len(), defaults::RECENT_LIMIT as usize);
        assert_eq!(recent[0].title, "n29");
    }

    #[tokio::test]
    async fn test_summarize_stores_summary() {
        let mock = MockGenerationBackend::new().with_fixed_response(" Roadmap sync. ");
        let (service, _) = service_with(mock.clone());
        let note = service
            .create(create_req("Meeting", "Discussed the roadmap"))
            .await
            .unwrap();

        let updated = service.summarize(note.id).await.unwrap();
        assert_eq!(updated.summary.as_deref(), Some("Roadmap sync."));
        assert!(updated.updated_at.is_some());
        assert_eq!(service.get_summary(note.id).await.unwrap(), "Roadmap sync.");
        assert_eq!(mock.generate_call_count(), 1);
    }

    #[tokio::test]
    async fn test_summarize_empty_content_leaves_note_unchanged() {
        let mock = MockGenerationBackend::new();
        let (service, _) = service_with(mock.clone());
        let note = service.create(create_req("Empty", "   ")).await.unwrap();

        let err = service.summarize(note.id).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(service.get(note.id).await.unwrap(), note);
        assert_eq!(mock.generate_call_count(), 0);
    }

    #[tokio::test]
    async fn test_summarize_error_mapping() {
        let (service, _) = service_with(MockGenerationBackend::new().with_fixed_response(""));
        let note = service.create(create_req("a", "content")).await.unwrap();
        assert!(matches!(
            service.summarize(note.id).await.unwrap_err(),
            Error::Internal(_)
        ));

        let (service, _) = service_with(MockGenerationBackend::new().with_failure("503"));
        let note = service.create(create_req("a", "content")).await.unwrap();
        assert!(matches!(
            service.summarize(note.id).await.unwrap_err(),
            Error::Upstream(_)
        ));
        assert!(service.get(note.id).await.unwrap().summary.is_none());
    }

    #[tokio::test]
    async fn test_summarize_unknown_note() {
        let mock = MockGenerationBackend::new();
        let (service, _) = service_with(mock.clone());
        assert!(service
            .summarize(Uuid::new_v4())
            .await
            .unwrap_err()
            .is_not_found());
        assert_eq!(mock.generate_call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_summary_missing() {
        let (service, _) = service_with(MockGenerationBackend::new());
        let note = service.create(create_req("a", "b")).await.unwrap();

        let err = service.get_summary(note.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Not found: Summary not found");
    }

    #[tokio::test]
    async fn test_health() {
        let (service, _) = service_with(MockGenerationBackend::new());
        service.health().await.unwrap();
    }
}
