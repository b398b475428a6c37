//! REST API client for the Gemini `generateContent` endpoint.
//!
//! Sends a single-turn text prompt and extracts the reply text. One request
//! per call: no retry, no backoff, no timeout beyond the transport default.

use serde::{Deserialize, Serialize};

/// Public v1beta endpoint of the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini REST API.
pub struct GeminiApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the Gemini REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentRequest {
    /// A single user turn carrying `prompt`.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
                role: None,
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// reply carries no text at all.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl GeminiApi {
    /// Create a new API client.
    ///
    /// * `base_url` - API root, e.g. [`DEFAULT_BASE_URL`].
    /// * `api_key` - provisioned credential.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// URL of the `generateContent` method for `model`.
    pub fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content for a single prompt.
    ///
    /// Sends `POST /models/{model}:generateContent` and returns the reply
    /// text, or `None` if the provider produced none.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<Option<String>, GeminiApiError> {
        let response = self
            .client
            .post(self.generate_url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let body: GenerateContentResponse = Self::parse_response(response).await?;
        if let Some(reason) = body.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            tracing::debug!(model, finish_reason = reason, "Gemini generation finished");
        }
        Ok(body.text())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GeminiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GeminiApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::test_support::serve_once;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("oi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "contents": [{ "parts": [{ "text": "oi" }] }] })
        );
    }

    #[test]
    fn response_text_concatenates_parts() {
        let body: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Prezados, " }, { "text": "moradores." }] },
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(body.text().as_deref(), Some("Prezados, moradores."));
        assert_eq!(body.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let body: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(body.text().is_none());
    }

    #[test]
    fn response_without_text_parts_has_no_text() {
        let body: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{}] }, "finishReason": "SAFETY" }]
        }))
        .unwrap();
        assert!(body.text().is_none());
    }

    #[test]
    fn generate_url_strips_trailing_slash() {
        let api = GeminiApi::new("http://localhost:9/v1beta/".into(), "k".into());
        assert_eq!(
            api.generate_url("gemini-2.5-flash"),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn api_error_display() {
        let err = GeminiApiError::ApiError {
            status: 403,
            body: "PERMISSION_DENIED".into(),
        };
        assert_eq!(err.to_string(), "Gemini API error (403): PERMISSION_DENIED");
    }

    #[tokio::test]
    async fn generate_content_sends_key_header_and_returns_text() {
        let (base_url, server) = serve_once(
            200,
            r#"{"candidates":[{"content":{"parts":[{"text":"Prezados moradores."}]},"finishReason":"STOP"}]}"#,
        )
        .await;
        let api = GeminiApi::new(base_url, "test-key".into());

        let text = api.generate_content("gemini-2.5-flash", "oi").await.unwrap();

        assert_eq!(text.as_deref(), Some("Prezados moradores."));
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1beta/models/gemini-2.5-flash:generateContent "));
        assert!(request.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(request.contains(r#"{"contents":[{"parts":[{"text":"oi"}]}]}"#));
    }

    #[tokio::test]
    async fn non_success_status_becomes_api_error() {
        let (base_url, server) =
            serve_once(403, r#"{"error":{"status":"PERMISSION_DENIED"}}"#).await;
        let api = GeminiApi::new(base_url, "revoked".into());

        let err = api.generate_content("gemini-2.5-flash", "oi").await.unwrap_err();

        assert_matches!(
            err,
            GeminiApiError::ApiError { status: 403, ref body } if body.contains("PERMISSION_DENIED")
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_error() {
        let api = GeminiApi::new("http://127.0.0.1:1/v1beta".into(), "k".into());
        let err = api.generate_content("gemini-2.5-flash", "oi").await.unwrap_err();
        assert_matches!(err, GeminiApiError::Request(_));
    }
}
