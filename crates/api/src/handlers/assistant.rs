//! Handlers for notice drafting and maintenance triage.
//!
//! Inputs are validated before the provider is contacted. Once past
//! validation these endpoints always answer 200: provider trouble is
//! reported through the `fallback` field of the result.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use condofacil_core::prompt::{DraftRequest, Tone, TriageRequest};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for drafting a notice.
#[derive(Debug, Deserialize)]
pub struct CreateDraftRequest {
    pub topic: String,
    pub tone: Tone,
}

/// Request body for classifying a maintenance description.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub description: String,
}

/// POST /api/v1/assistant/drafts
pub async fn generate_draft(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateDraftRequest>,
) -> AppResult<impl IntoResponse> {
    let request = DraftRequest::new(&body.topic, body.tone)?;
    let draft = state.assistant.generate_draft(&request).await;
    Ok(Json(DataResponse { data: draft }))
}

/// POST /api/v1/assistant/triage
pub async fn analyze_request(
    State(state): State<AppState>,
    AppJson(body): AppJson<AnalyzeRequest>,
) -> AppResult<impl IntoResponse> {
    let request = TriageRequest::new(&body.description)?;
    let triage = state.assistant.analyze(&request).await;
    Ok(Json(DataResponse { data: triage }))
}
