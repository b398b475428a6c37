use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/amenities
pub async fn list_amenities(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let board = state.board.read().await;
    Ok(Json(DataResponse {
        data: board.amenities().to_vec(),
    }))
}

/// GET /api/v1/dashboard
pub async fn dashboard_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summary = state.board.read().await.summary();
    Ok(Json(DataResponse { data: summary }))
}
