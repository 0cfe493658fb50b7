//! Gemini `generateContent` wire types.

use serde::{Deserialize, Serialize};

/// A single text part of a content block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// A content block (one conversational turn).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single user turn carrying `prompt`.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
                role: None,
            }],
        }
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response body for `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// `None` when there are no candidates, e.g. the prompt was blocked.
    pub fn text(&self) -> Option<String> {
        self.candidates.first().map(|c| {
            c.content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect::<String>()
        })
    }
}

/// Error envelope returned on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiError {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let req = GenerateContentRequest::from_prompt("hello");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "Weekly "}, {"text": "sync."}], "role": "model"},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "modelVersion": "gemini-2.0-flash-001"
        }))
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("Weekly sync."));
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_response_without_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.text().is_none());

        let resp: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert_eq!(resp.text().as_deref(), Some(""));
    }

    #[test]
    fn test_error_response_parsing() {
        let err: GeminiErrorResponse = serde_json::from_str(
            r#"{"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}}"#,
        )
        .unwrap();
        assert_eq!(err.error.code, 403);
        assert_eq!(err.error.status, "PERMISSION_DENIED");
    }
}
