//! Shared response envelope types for API handlers.
//!
//! Dashboard endpoints answer with a `{ "data": ... }` envelope. The mail
//! relay keeps the `{ "success": true, "message": ... }` shape its
//! front-end callers expect.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Message returned after a relayed email is accepted by the provider.
pub const EMAIL_SENT_MESSAGE: &str = "Email enviado com sucesso!";

/// Success body of the mail relay endpoints.
#[derive(Debug, Serialize)]
pub struct RelayResponse {
    pub success: bool,
    pub message: &'static str,
}

impl RelayResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: EMAIL_SENT_MESSAGE,
        }
    }
}
