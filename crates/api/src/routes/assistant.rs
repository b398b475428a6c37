//! Route definitions for the notice and triage assistant.
//!
//! ```text
//! POST   /drafts                             generate_draft
//! POST   /triage                             analyze_request
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::assistant;
use crate::state::AppState;

/// Assistant routes -- mounted at `/assistant`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/drafts", post(assistant::generate_draft))
        .route("/triage", post(assistant::analyze_request))
}
