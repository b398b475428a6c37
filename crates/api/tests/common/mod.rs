#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use condofacil_ai::api::GeminiApiError;
use condofacil_ai::{Assistant, AssistantConfig, GenerateError, TextGenerator};
use condofacil_api::config::ServerConfig;
use condofacil_api::router::build_app_router;
use condofacil_api::state::AppState;
use condofacil_core::board::Board;
use condofacil_mail::{MailConfig, MailError, MailRelay, MailTransport, OutboundEmail};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and no provider credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        assistant: AssistantConfig::new(None, None, None),
        mail: MailConfig::default(),
    }
}

/// Build the full application router with no AI credential and no mail
/// provider, over the seeded board.
pub fn build_test_app() -> Router {
    build_app_with(Assistant::disabled(), None)
}

/// Build the full application router with the given assistant and mail
/// transport, using the production middleware stack.
pub fn build_app_with(assistant: Assistant, transport: Option<Arc<dyn MailTransport>>) -> Router {
    let config = test_config();
    let mail = MailRelay::new(&config.mail, transport);
    let state = AppState::new(config.clone(), assistant, mail, Board::seeded());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// Text generator replying with a fixed outcome and recording prompts.
pub struct FakeGenerator {
    reply: Result<Option<String>, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(Some(text.to_string())),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("provider unavailable".to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(|body| GenerateError::from(GeminiApiError::ApiError { status: 503, body }))
    }

    fn model(&self) -> &str {
        "fake"
    }
}

/// Mail transport that records messages, or rejects them with a fixed body.
pub struct FakeOutbox {
    rejection: Option<(u16, String)>,
    pub sent: Mutex<Vec<OutboundEmail>>,
}

impl FakeOutbox {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            rejection: None,
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn rejecting(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            rejection: Some((status, body.to_string())),
            sent: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MailTransport for FakeOutbox {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if let Some((status, body)) = &self.rejection {
            return Err(MailError::Rejected {
                status: *status,
                body: body.clone(),
            });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
