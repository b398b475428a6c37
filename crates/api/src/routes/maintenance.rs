//! Route definitions for maintenance requests.
//!
//! ```text
//! GET    /                                   list_requests
//! POST   /                                   open_request
//! PATCH  /{id}/status                        update_status
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Maintenance routes -- mounted at `/maintenance`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(maintenance::list_requests).post(maintenance::open_request),
        )
        .route("/{id}/status", patch(maintenance::update_status))
}
