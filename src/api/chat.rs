//! Chat relay API
//!
//! The single business endpoint: accept a (message, API key) pair, forward
//! it to the Gemini API, and hand the first candidate's text back verbatim.
//!
//! The relay is stateless. Nothing about a request survives its response;
//! conversation history, if any, is entirely the caller's concern.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::gemini;
use crate::state::AppState;

/// Request body for `POST /api/chat`
///
/// Both fields are optional at the serde level so that an absent field or an
/// explicit `null` reaches the validation below and gets the contract's 400
/// response, instead of failing body extraction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The user message to relay
    #[serde(default)]
    pub message: Option<String>,
    /// Caller-supplied Gemini API key, passed through to the upstream call
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Response body for a successful relay call
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The first candidate's text, verbatim
    pub response: String,
}

/// POST /api/chat - Relay one message to the Gemini API
///
/// Validates that both fields are present and non-empty (upstream is never
/// contacted otherwise), issues the single outbound call, and wraps the
/// extracted text. Failure paths map to fixed error bodies via [`AppError`].
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = request.message.unwrap_or_default();
    let api_key = request.api_key.unwrap_or_default();

    if message.is_empty() || api_key.is_empty() {
        return Err(AppError::InvalidRequest);
    }

    info!(message_len = message.len(), "Chat request received");

    let response_text = gemini::client::generate_content(
        &state.http_client,
        &state.config.gemini,
        &api_key,
        &message,
    )
    .await?;

    info!(response_len = response_text.len(), "Chat response ready");

    Ok(Json(ChatResponse {
        response: response_text,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeminiConfig, ServerConfig};
    use mockito::{Matcher, Server};
    use serde_json::json;
    use serial_test::serial;

    fn test_state(base_url: &str) -> AppState {
        let config = Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
            },
            gemini: GeminiConfig {
                base_url: base_url.to_string(),
                ..GeminiConfig::default()
            },
        };
        AppState::new(config).expect("Failed to build test state")
    }

    fn request(message: Option<&str>, api_key: Option<&str>) -> ChatRequest {
        ChatRequest {
            message: message.map(str::to_string),
            api_key: api_key.map(str::to_string),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_chat_missing_message_never_calls_upstream() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let state = test_state(&server.url());
        let result = chat(State(state), Json(request(None, Some("test-key")))).await;

        mock.assert_async().await;
        assert!(matches!(result.unwrap_err(), AppError::InvalidRequest));
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_or_missing_fields() {
        // No mock server: validation short-circuits before any network use.
        let state = test_state("http://127.0.0.1:0");
        for (message, api_key) in [
            (Some(""), Some("test-key")),
            (Some("Hello"), Some("")),
            (Some("Hello"), None),
            (None, None),
        ] {
            let result = chat(State(state.clone()), Json(request(message, api_key))).await;
            assert!(
                matches!(result.unwrap_err(), AppError::InvalidRequest),
                "Expected InvalidRequest for message={:?} api_key={:?}",
                message,
                api_key
            );
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_chat_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(200)
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "Hello"}]}}]}"#)
            .create_async()
            .await;

        let state = test_state(&server.url());
        let result = chat(
            State(state),
            Json(request(Some("Say hello"), Some("test-key"))),
        )
        .await;

        mock.assert_async().await;
        assert_eq!(result.unwrap().0.response, "Hello");
    }

    #[tokio::test]
    #[serial]
    async fn test_chat_forwards_upstream_failure() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .with_status(429)
            .with_body(r#"{"error": {"message": "Resource has been exhausted"}}"#)
            .create_async()
            .await;

        let state = test_state(&server.url());
        let result = chat(
            State(state),
            Json(request(Some("Say hello"), Some("test-key"))),
        )
        .await;

        mock.assert_async().await;
        match result.unwrap_err() {
            AppError::UpstreamStatus { status } => assert_eq!(status, 429),
            other => panic!("Expected UpstreamStatus error, got: {:?}", other),
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_chat_whitespace_message_is_forwarded() {
        // Only empty strings are rejected; whitespace goes upstream
        // untouched.
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-1.5-flash:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::Json(json!({
                "contents": [{"parts": [{"text": "   "}]}]
            })))
            .with_status(200)
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "Hm?"}]}}]}"#)
            .create_async()
            .await;

        let state = test_state(&server.url());
        let result = chat(State(state), Json(request(Some("   "), Some("test-key")))).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap().0.response, "Hm?");
    }
}
