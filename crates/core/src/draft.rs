//! Notice drafts and the pass-through interpretation of drafting replies.

use serde::Serialize;

use crate::fallback::FallbackReason;

/// Returned when no provider credential is configured.
pub const MISSING_CREDENTIAL_TEXT: &str =
    "Erro: Chave de API não configurada. Não foi possível gerar o texto.";

/// Returned when the provider answers without text.
pub const EMPTY_REPLY_TEXT: &str = "Não foi possível gerar o aviso.";

/// Returned when the provider call fails.
pub const PROVIDER_ERROR_TEXT: &str =
    "Ocorreu um erro ao tentar conectar com a Inteligência Artificial.";

/// A candidate notice text, subject to human edit before publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub text: String,
    /// Set when `text` is a placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

impl Draft {
    /// The placeholder draft for a given fallback reason.
    pub fn placeholder(reason: FallbackReason) -> Self {
        let text = match reason {
            FallbackReason::MissingCredential => MISSING_CREDENTIAL_TEXT,
            FallbackReason::EmptyReply | FallbackReason::UnparseableReply => EMPTY_REPLY_TEXT,
            FallbackReason::ProviderError => PROVIDER_ERROR_TEXT,
        };
        Self {
            text: text.to_string(),
            fallback: Some(reason),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Interpret a drafting reply: the trimmed text, or the empty-reply placeholder.
pub fn interpret_draft(raw: Option<&str>) -> Draft {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => Draft {
            text: text.to_string(),
            fallback: None,
        },
        _ => Draft::placeholder(FallbackReason::EmptyReply),
    }
}
