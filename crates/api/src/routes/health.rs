use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether a generative-AI credential is configured.
    pub assistant_enabled: bool,
    /// Whether the mail relay has a provider.
    pub mail_configured: bool,
    /// Name of the active mail transport, `"none"` when unconfigured.
    pub mail_transport: &'static str,
}

/// GET /health -- returns service status and provider configuration.
///
/// A missing provider never makes the service unhealthy: the assistant
/// answers with placeholders and the relay answers 500 per request.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        assistant_enabled: state.assistant.is_enabled(),
        mail_configured: state.mail.is_configured(),
        mail_transport: state.mail.transport_name(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
