//! Integration tests for the Gemini backend against a mock HTTP server.

use std::sync::Arc;

use smart_notes_core::GenerationBackend;
use smart_notes_inference::{GeminiBackend, GeminiConfig, Summarizer, SummaryError};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

fn backend_for(server: &MockServer) -> GeminiBackend {
    GeminiBackend::new(GeminiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        model: MODEL.to_string(),
        timeout_seconds: 5,
    })
    .expect("Failed to create backend")
}

fn text_response(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|t| serde_json::json!({ "text": t })).collect();
    serde_json::json!({
        "candidates": [{
            "content": { "parts": parts, "role": "model" },
            "finishReason": "STOP"
        }],
        "modelVersion": MODEL
    })
}

#[tokio::test]
async fn test_generate_sends_key_and_prompt() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "Say hi" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&["Hi", "!"])))
        .expect(1)
        .mount(&server)
        .await;

    let backend = backend_for(&server);
    let text = backend.generate("Say hi").await.expect("generate failed");
    assert_eq!(text, "Hi!");
}

#[tokio::test]
async fn test_generate_error_status_carries_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "API key not valid",
                "status": "PERMISSION_DENIED"
            }
        })))
        .mount(&server)
        .await;

    let err = backend_for(&server).generate("x").await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("403"), "unexpected error: {}", msg);
    assert!(msg.contains("API key not valid"), "unexpected error: {}", msg);
}

#[tokio::test]
async fn test_generate_error_without_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = backend_for(&server).generate("x").await.unwrap_err();
    assert!(err.to_string().contains("Unknown error"));
}

#[tokio::test]
async fn test_summarizer_over_gemini() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_response(&["  Q3 roadmap sync.\n"])),
        )
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(Arc::new(backend_for(&server)));
    let summary = summarizer
        .summarize("We discussed the Q3 roadmap at length.")
        .await
        .unwrap();
    assert_eq!(summary, "Q3 roadmap sync.");
}

#[tokio::test]
async fn test_summarizer_no_candidates_is_upstream_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(Arc::new(backend_for(&server)));
    assert!(matches!(
        summarizer.summarize("content").await,
        Err(SummaryError::Upstream(ref msg)) if msg.contains("no candidates")
    ));
}

#[tokio::test]
async fn test_summarizer_blank_candidate_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&["  "])))
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(Arc::new(backend_for(&server)));
    assert_eq!(
        summarizer.summarize("content").await,
        Err(SummaryError::EmptyResponse)
    );
}

#[tokio::test]
async fn test_summarizer_maps_http_failure_to_upstream() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let summarizer = Summarizer::new(Arc::new(backend_for(&server)));
    assert!(matches!(
        summarizer.summarize("content").await,
        Err(SummaryError::Upstream(_))
    ));
}
