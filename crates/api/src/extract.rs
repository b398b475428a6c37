use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejections (malformed body, wrong content
/// type, unknown enum value) answer with the `{ error, code }` envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
