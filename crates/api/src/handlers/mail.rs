//! Handlers for the mail relay.
//!
//! Payload validation happens before the relay is consulted, so a bad
//! request answers 400 even when no provider is configured.

use axum::extract::State;
use axum::Json;

use condofacil_core::contact::{ContactForm, DirectMessage};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::RelayResponse;
use crate::state::AppState;

/// POST /api/send-email
pub async fn send_contact_email(
    State(state): State<AppState>,
    AppJson(form): AppJson<ContactForm>,
) -> AppResult<Json<RelayResponse>> {
    form.check()?;
    state.mail.send_contact(&form).await?;
    Ok(Json(RelayResponse::sent()))
}

/// POST /api/v1/mail/send
pub async fn send_direct_email(
    State(state): State<AppState>,
    AppJson(message): AppJson<DirectMessage>,
) -> AppResult<Json<RelayResponse>> {
    message.check()?;
    state.mail.send_direct(&message).await?;
    Ok(Json(RelayResponse::sent()))
}

/// Any non-POST method on a relay endpoint.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
