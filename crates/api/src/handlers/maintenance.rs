//! Handlers for maintenance requests.
//!
//! New requests are classified by the assistant before they are stored.
//! The board lock is not held across the provider call.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use condofacil_core::board::{MaintenanceRequest, MaintenanceStatus, NewMaintenanceRequest};
use condofacil_core::fallback::FallbackReason;
use condofacil_core::prompt::TriageRequest;
use condofacil_core::types::EntityId;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for opening a maintenance request.
#[derive(Debug, Deserialize)]
pub struct OpenRequestBody {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
}

/// Request body for changing a request's status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusBody {
    pub status: MaintenanceStatus,
}

/// A freshly opened request plus why its classification is a default, if it is.
#[derive(Debug, Serialize)]
pub struct OpenedRequest {
    #[serde(flatten)]
    pub request: MaintenanceRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triage_fallback: Option<FallbackReason>,
}

/// GET /api/v1/maintenance -- newest first.
pub async fn list_requests(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let board = state.board.read().await;
    Ok(Json(DataResponse {
        data: board.requests().to_vec(),
    }))
}

/// POST /api/v1/maintenance
///
/// Validates the whole request, classifies the description, then stores
/// the request as `open`.
pub async fn open_request(
    State(state): State<AppState>,
    AppJson(body): AppJson<OpenRequestBody>,
) -> AppResult<impl IntoResponse> {
    let input = NewMaintenanceRequest {
        title: body.title,
        description: body.description,
        location: body.location,
    };
    input.validate()?;
    let triage_request = TriageRequest::new(&input.description)?;
    let triage = state.assistant.analyze(&triage_request).await;

    let request = state
        .board
        .write()
        .await
        .open_request(input, triage.result)?;

    tracing::info!(
        request_id = %request.id,
        priority = request.priority.as_str(),
        category = %request.category,
        "Maintenance request opened"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: OpenedRequest {
                request,
                triage_fallback: triage.fallback,
            },
        }),
    ))
}

/// PATCH /api/v1/maintenance/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    AppJson(body): AppJson<UpdateStatusBody>,
) -> AppResult<impl IntoResponse> {
    let request = state
        .board
        .write()
        .await
        .set_request_status(id, body.status)?;

    tracing::info!(request_id = %id, status = ?request.status, "Maintenance status changed");

    Ok(Json(DataResponse { data: request }))
}
