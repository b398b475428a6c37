//! Route definitions for the mail relay.
//!
//! Both endpoints accept POST only; any other method answers a JSON 405.
//!
//! ```text
//! POST   /api/send-email                     send_contact_email
//! POST   /api/v1/mail/send                   send_direct_email
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::mail;
use crate::state::AppState;

/// Contact-form relay -- merged at the root.
pub fn contact_router() -> Router<AppState> {
    Router::new().route(
        "/api/send-email",
        post(mail::send_contact_email).fallback(mail::method_not_allowed),
    )
}

/// Direct message relay -- mounted at `/mail`.
pub fn direct_router() -> Router<AppState> {
    Router::new().route(
        "/send",
        post(mail::send_direct_email).fallback(mail::method_not_allowed),
    )
}
