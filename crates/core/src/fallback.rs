//! Reasons an assistant answer is a placeholder rather than model output.

use serde::Serialize;

/// Why the assistant returned a fixed placeholder instead of model output.
///
/// The placeholder itself is still a valid answer; this tag only lets
/// callers tell "the model said so" apart from "the model was not heard".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No provider credential is configured; no call was made.
    MissingCredential,
    /// The provider call failed (transport, status, decoding).
    ProviderError,
    /// The provider answered without any text.
    EmptyReply,
    /// The reply could not be parsed into the expected shape.
    UnparseableReply,
}

impl FallbackReason {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackReason::MissingCredential => "missing_credential",
            FallbackReason::ProviderError => "provider_error",
            FallbackReason::EmptyReply => "empty_reply",
            FallbackReason::UnparseableReply => "unparseable_reply",
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
