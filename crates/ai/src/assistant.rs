//! Notice drafting and maintenance triage.
//!
//! Both operations always return a usable value. A missing credential,
//! a failed provider call, or an unreadable reply each map to a fixed
//! placeholder tagged with a [`FallbackReason`]; nothing is propagated.

use std::sync::Arc;

use condofacil_core::draft::{interpret_draft, Draft};
use condofacil_core::fallback::FallbackReason;
use condofacil_core::prompt::{notice_prompt, triage_prompt, DraftRequest, TriageRequest};
use condofacil_core::triage::{interpret_triage, Triage};

use crate::api::GeminiApi;
use crate::config::AssistantConfig;
use crate::generator::{GeminiGenerator, TextGenerator};

/// Drafts resident notices and classifies maintenance requests.
///
/// Cheap to share behind an `Arc`; holds no per-call state.
#[derive(Clone)]
pub struct Assistant {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl Assistant {
    /// Build from configuration. Without a credential the assistant is
    /// created disabled and never contacts the provider.
    pub fn from_config(config: &AssistantConfig) -> Self {
        match &config.api_key {
            Some(key) => {
                let api = GeminiApi::new(config.base_url.clone(), key.clone());
                Self::with_generator(Arc::new(GeminiGenerator::new(api, config.model.clone())))
            }
            None => {
                tracing::warn!("API key is missing for the assistant; AI features will return placeholders");
                Self::disabled()
            }
        }
    }

    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn disabled() -> Self {
        Self { generator: None }
    }

    /// Whether a credential was configured.
    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Draft a resident notice.
    pub async fn generate_draft(&self, request: &DraftRequest) -> Draft {
        let Some(generator) = &self.generator else {
            return Draft::placeholder(FallbackReason::MissingCredential);
        };

        let prompt = notice_prompt(request);
        match generator.generate(&prompt).await {
            Ok(text) => {
                let draft = interpret_draft(text.as_deref());
                tracing::info!(
                    model = generator.model(),
                    tone = request.tone().as_str(),
                    placeholder = draft.is_placeholder(),
                    "Notice draft generated"
                );
                draft
            }
            Err(e) => {
                tracing::error!(model = generator.model(), error = %e, "Notice draft generation failed");
                Draft::placeholder(FallbackReason::ProviderError)
            }
        }
    }

    /// Classify a maintenance request into a priority and category.
    pub async fn analyze(&self, request: &TriageRequest) -> Triage {
        let Some(generator) = &self.generator else {
            return Triage::fallback(FallbackReason::MissingCredential);
        };

        let prompt = triage_prompt(request);
        match generator.generate(&prompt).await {
            Ok(text) => {
                let triage = interpret_triage(text.as_deref());
                tracing::info!(
                    model = generator.model(),
                    priority = triage.result.priority.as_str(),
                    category = %triage.result.category,
                    classified = triage.is_classified(),
                    "Maintenance request analyzed"
                );
                triage
            }
            Err(e) => {
                tracing::error!(model = generator.model(), error = %e, "Maintenance analysis failed");
                Triage::fallback(FallbackReason::ProviderError)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
