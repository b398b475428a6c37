//! The text-generation seam used by the assistant.
//!
//! Production code plugs in [`GeminiGenerator`]; tests substitute scripted
//! generators so no network call is ever made.

use async_trait::async_trait;

use crate::api::{GeminiApi, GeminiApiError};

/// Errors surfaced by a [`TextGenerator`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Gemini(#[from] GeminiApiError),
}

/// Produces raw model text for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Issue one generation call. `Ok(None)` means the provider answered
    /// without any text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerateError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

/// [`TextGenerator`] backed by a fixed Gemini model.
pub struct GeminiGenerator {
    api: GeminiApi,
    model: String,
}

impl GeminiGenerator {
    pub fn new(api: GeminiApi, model: impl Into<String>) -> Self {
        Self {
            api,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerateError> {
        Ok(self.api.generate_content(&self.model, prompt).await?)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
