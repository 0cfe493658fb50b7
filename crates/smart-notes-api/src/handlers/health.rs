//! Liveness endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::warn;

use crate::{ApiError, AppState};

/// `GET /health`: 200 when the note store answers, 503 otherwise.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    if let Err(e) = state.service.health().await {
        warn!(subsystem = "api", component = "health", error = %e, "Store health check failed");
        return Err(ApiError::Unavailable("Database unreachable".to_string()));
    }

    Ok(Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "database": "ok",
    })))
}
