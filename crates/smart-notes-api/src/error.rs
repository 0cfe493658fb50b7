//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use smart_notes_core::Error;

/// Error returned by handlers. Serialized as `{"message": ...}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
    Upstream(String),
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Internal(msg)
            | ApiError::Upstream(msg)
            | ApiError::Unavailable(msg) => msg,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::NotFound(msg) => ApiError::NotFound(msg),
            Error::NoteNotFound(_) => ApiError::NotFound("Note not found".to_string()),
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::Internal(msg) => ApiError::Internal(msg),
            Error::Upstream(msg) => ApiError::Upstream(msg),
            other => {
                error!(subsystem = "api", error = %other, "Unhandled service error");
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "message": self.message(),
        }));

        (self.status(), body).into_response()
    }
}
