use axum::routing::get;
use axum::Router;

use crate::handlers::board;
use crate::state::AppState;

/// Read-only board views -- merged into `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/amenities", get(board::list_amenities))
        .route("/dashboard", get(board::dashboard_summary))
}
