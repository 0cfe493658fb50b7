//! # smart-notes-api
//!
//! HTTP API for smart-notes: note CRUD, fuzzy filtering, recent notes and
//! AI summaries.
//!
//! The binary in `main.rs` wires a PostgreSQL repository and the Gemini
//! backend into [`AppState`]; tests build the same router over the in-memory
//! repository and a mock backend.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query_types;
pub mod services;

use std::sync::Arc;

use axum::http::Request;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

pub use config::Config;
pub use error::ApiError;
pub use services::NoteService;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NoteService>,
}

impl AppState {
    pub fn new(service: NoteService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Build the application router with middleware.
pub fn build_router(state: AppState) -> Router {
    use handlers::{health, notes};

    Router::new()
        .route("/health", get(health::health_check))
        .route("/notes", get(notes::list_notes))
        .route(
            "/notes/",
            post(notes::create_note).delete(notes::delete_all_notes),
        )
        .route("/notes/filter/", get(notes::filter_notes))
        .route("/notes/recent/", get(notes::recent_notes))
        .route(
            "/notes/:id",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/notes/:id/summarize", put(notes::summarize_note))
        .route("/notes/:id/summary", get(notes::get_note_summary))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
