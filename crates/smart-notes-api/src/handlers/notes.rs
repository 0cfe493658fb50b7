//! Note HTTP handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use futures::TryStreamExt;
use serde_json::{json, Value};

use smart_notes_core::{CreateNoteRequest, Note, UpdateNoteRequest};

use crate::query_types::{FilterQuery, RecentQuery};
use crate::services::parse_note_id;
use crate::{ApiError, AppState};

/// `POST /notes/`
pub async fn create_note(
    State(state): State<AppState>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note = state.service.create(req).await?;
    Ok(Json(note))
}

/// `GET /notes/:id`
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.service.get(id).await?))
}

/// `GET /notes`
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes: Vec<Note> = state.service.list_all().try_collect().await?;
    Ok(Json(notes))
}

/// `PUT /notes/:id`
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.service.update(id, req).await?))
}

/// `DELETE /notes/:id`
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_note_id(&id)?;
    state.service.delete(id).await?;
    Ok(Json(json!({ "message": "Note deleted successfully" })))
}

/// `DELETE /notes/`
pub async fn delete_all_notes(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let removed = state.service.delete_all().await?;
    Ok(Json(json!({
        "message": format!("Deleted {} notes successfully", removed)
    })))
}

/// `GET /notes/filter/?query=&tag=&threshold=`
pub async fn filter_notes(
    State(state): State<AppState>,
    Query(params): Query<FilterQuery>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let threshold = params.threshold()?;
    let notes = state
        .service
        .filter(params.query.as_deref(), params.tag.as_deref(), threshold)
        .await?;
    Ok(Json(notes))
}

/// `GET /notes/recent/?limit=`
pub async fn recent_notes(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let limit = params.limit()?;
    Ok(Json(state.service.recent(limit).await?))
}

/// `PUT /notes/:id/summarize`
pub async fn summarize_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.service.summarize(id).await?))
}

/// `GET /notes/:id/summary`
pub async fn get_note_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<String>, ApiError> {
    let id = parse_note_id(&id)?;
    Ok(Json(state.service.get_summary(id).await?))
}
