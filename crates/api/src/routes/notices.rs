//! Route definitions for the notice board.
//!
//! ```text
//! GET    /                                   list_notices
//! POST   /                                   publish_notice
//! DELETE /{id}                               remove_notice
//! ```

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::notices;
use crate::state::AppState;

/// Notice routes -- mounted at `/notices`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notices::list_notices).post(notices::publish_notice))
        .route("/{id}", delete(notices::remove_notice))
}
