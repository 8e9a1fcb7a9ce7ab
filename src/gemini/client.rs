//! Gemini API client
//!
//! Direct HTTP client for the `generateContent` endpoint. One call in, one
//! text span out; every failure maps onto the relay's error taxonomy.

use crate::config::GeminiConfig;
use crate::error::AppError;
use crate::gemini::types::{GeminiApiRequest, GeminiApiResponse, RequestContent, RequestPart};
use anyhow::anyhow;

/// Call the Gemini API with a single-message prompt
///
/// Issues one POST to `{base_url}/models/{model}:generateContent` with the
/// API key as a query credential and `message` as the sole content part,
/// then extracts `candidates[0].content.parts[0].text` from the response.
/// The URL embeds the key, so the URL is never logged.
///
/// # Arguments
/// * `client` - Shared HTTP client (connection pooling)
/// * `config` - Upstream settings (base URL, model)
/// * `api_key` - Caller-supplied Gemini API key
/// * `message` - The message to forward
///
/// # Errors
/// * `AppError::UpstreamStatus` if the API answers with a non-success status
/// * `AppError::InvalidResponseFormat` if the decoded body lacks
///   `candidates[0].content`
/// * `AppError::NoResponseText` if the extracted text is absent or empty
/// * `AppError::Internal` if the request cannot be sent or the body cannot
///   be decoded as JSON
pub async fn generate_content(
    client: &reqwest::Client,
    config: &GeminiConfig,
    api_key: &str,
    message: &str,
) -> Result<String, AppError> {
    let url = format!(
        "{}/models/{}:generateContent?key={}",
        config.base_url, config.model, api_key
    );

    let request_body = GeminiApiRequest {
        contents: vec![RequestContent {
            parts: vec![RequestPart {
                text: message.to_string(),
            }],
        }],
    };

    tracing::debug!(
        model = %config.model,
        message_len = message.len(),
        "Calling Gemini API"
    );

    // Make POST request using the shared client (connection pooling)
    let response = client
        .post(&url)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| {
            // reqwest error text embeds the request URL, and the URL embeds
            // the key. Strip it before the error can reach a log line.
            AppError::Internal(anyhow!(
                "Failed to send HTTP request to Gemini API: {}",
                e.without_url()
            ))
        })?;

    // Check HTTP status
    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status_code,
            error_body = %error_body,
            "Gemini API returned error status"
        );

        return Err(AppError::UpstreamStatus {
            status: status_code,
        });
    }

    // Parse response body
    let response_body = response.text().await.map_err(|e| {
        AppError::Internal(anyhow!(
            "Failed to read response body from Gemini API: {}",
            e.without_url()
        ))
    })?;

    let parsed: GeminiApiResponse = serde_json::from_str(&response_body).map_err(|e| {
        AppError::Internal(anyhow!(
            "Failed to parse JSON response from Gemini API: {}",
            e
        ))
    })?;

    // Extract text content; a missing or null level anywhere above the text
    // is a shape error, a missing or empty text is a payload error.
    let candidate = parsed
        .candidates
        .as_ref()
        .and_then(|candidates| candidates.first())
        .and_then(Option::as_ref)
        .ok_or(AppError::InvalidResponseFormat)?;

    let content = candidate
        .content
        .as_ref()
        .ok_or(AppError::InvalidResponseFormat)?;

    let text = content
        .parts
        .as_ref()
        .and_then(|parts| parts.first())
        .and_then(Option::as_ref)
        .and_then(|part| part.text.as_deref())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AppError::NoResponseText);
    }

    tracing::debug!(
        response_len = text.len(),
        "Successfully received response from Gemini API"
    );

    Ok(text.to_string())
}
