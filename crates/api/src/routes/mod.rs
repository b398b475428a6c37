pub mod assistant;
pub mod board;
pub mod health;
pub mod mail;
pub mod maintenance;
pub mod notices;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assistant/drafts                                draft a notice (POST)
/// /assistant/triage                                classify a request (POST)
///
/// /notices                                         list, publish
/// /notices/{id}                                    remove (DELETE)
///
/// /maintenance                                     list, open (triaged)
/// /maintenance/{id}/status                         change status (PATCH)
///
/// /amenities                                       amenity catalog
/// /dashboard                                       board counters
///
/// /mail/send                                       direct message relay (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assistant", assistant::router())
        .nest("/notices", notices::router())
        .nest("/maintenance", maintenance::router())
        .merge(board::router())
        .nest("/mail", mail::direct_router())
}
