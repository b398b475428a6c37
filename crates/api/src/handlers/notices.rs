use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use condofacil_core::board::NewNotice;
use condofacil_core::prompt::Tone;
use condofacil_core::types::EntityId;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for publishing a notice.
#[derive(Debug, Deserialize)]
pub struct PublishNoticeRequest {
    pub title: String,
    pub content: String,
    pub tone: Tone,
}

/// GET /api/v1/notices -- newest first.
pub async fn list_notices(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let board = state.board.read().await;
    Ok(Json(DataResponse {
        data: board.notices().to_vec(),
    }))
}

/// POST /api/v1/notices
pub async fn publish_notice(
    State(state): State<AppState>,
    AppJson(body): AppJson<PublishNoticeRequest>,
) -> AppResult<impl IntoResponse> {
    let notice = state.board.write().await.publish_notice(NewNotice {
        title: body.title,
        content: body.content,
        tone: body.tone,
    })?;

    tracing::info!(
        notice_id = %notice.id,
        important = notice.important,
        "Notice published"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: notice })))
}

/// DELETE /api/v1/notices/{id}
pub async fn remove_notice(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.board.write().await.remove_notice(id)?;
    tracing::info!(notice_id = %id, "Notice removed");
    Ok(StatusCode::NO_CONTENT)
}
