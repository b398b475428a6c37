use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use condofacil_core::error::CoreError;
use condofacil_mail::MailError;
use serde_json::json;

/// Answered when the mail relay has no provider credential.
pub const MAIL_NOT_CONFIGURED_MESSAGE: &str = "API Key do SendGrid não configurada";

/// Answered when the provider refuses or cannot take the message.
pub const MAIL_FAILED_MESSAGE: &str = "Falha ao enviar email";

/// Answered for non-POST calls to the relay endpoints.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`MailError`] for relay
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `condofacil_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A delivery error from the mail relay.
    #[error(transparent)]
    Mail(#[from] MailError),

    /// A request body that could not be read as the expected JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The endpoint exists but does not accept this method.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut details = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            },

            // --- Mail relay errors ---
            AppError::Mail(mail) => classify_mail_error(mail, &mut details),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let Some(details) = details {
            body["details"] = json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a mail error into an HTTP status, error code, and message.
///
/// - `NotConfigured` maps to 500 `MAIL_NOT_CONFIGURED`.
/// - `Rejected` maps to 500 `MAIL_DELIVERY_FAILED` with the provider body
///   copied into `details`.
/// - Everything else maps to 500 `MAIL_DELIVERY_FAILED` with no details.
fn classify_mail_error(
    err: &MailError,
    details: &mut Option<String>,
) -> (StatusCode, &'static str, String) {
    match err {
        MailError::NotConfigured => {
            tracing::error!("Mail relay called without a configured provider");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MAIL_NOT_CONFIGURED",
                MAIL_NOT_CONFIGURED_MESSAGE.to_string(),
            )
        }
        MailError::Rejected { status, body } => {
            tracing::error!(provider_status = status, body = %body, "Mail provider rejected message");
            *details = Some(body.clone());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MAIL_DELIVERY_FAILED",
                MAIL_FAILED_MESSAGE.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Mail delivery failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MAIL_DELIVERY_FAILED",
                MAIL_FAILED_MESSAGE.to_string(),
            )
        }
    }
}
