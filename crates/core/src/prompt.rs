//! Instruction templates for the notice-drafting and triage assistant.
//!
//! Both builders are pure: identical requests always render byte-identical
//! prompts. Input validation happens once, in the request constructors.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a notice topic in characters.
pub const MAX_TOPIC_LENGTH: usize = 500;

/// Maximum length of a maintenance description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Instruction appended to every notice prompt.
pub const NO_GREETING_INSTRUCTION: &str =
    "Não inclua saudações genéricas como \"Olá eu sou a IA\", apenas o texto do aviso.";

/// Length instruction appended to every notice prompt.
pub const LENGTH_INSTRUCTION: &str =
    "O texto deve ser claro, conciso e bem formatado (máximo 2 parágrafos).";

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// Register requested for a notice draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Friendly,
    Urgent,
}

impl Tone {
    /// All tones, in display order.
    pub const ALL: [Tone; 3] = [Tone::Formal, Tone::Friendly, Tone::Urgent];

    /// Adjective phrase embedded in the prompt.
    pub fn phrase(self) -> &'static str {
        match self {
            Tone::Formal => "Formal e respeitoso",
            Tone::Friendly => "Amigável e comunitário",
            Tone::Urgent => "Urgente e direto",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Urgent => "urgent",
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// A validated request for a notice draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    topic: String,
    tone: Tone,
}

impl DraftRequest {
    /// Build a draft request. The topic is trimmed and must not be empty.
    pub fn new(topic: &str, tone: Tone) -> Result<Self, CoreError> {
        let topic = require_text("Topic", topic, MAX_TOPIC_LENGTH)?;
        Ok(Self { topic, tone })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }
}

/// A validated request for maintenance triage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageRequest {
    description: String,
}

impl TriageRequest {
    /// Build a triage request. The description is trimmed and must not be empty.
    pub fn new(description: &str) -> Result<Self, CoreError> {
        let description = require_text("Description", description, MAX_DESCRIPTION_LENGTH)?;
        Ok(Self { description })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn require_text(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Render the drafting instruction for a resident notice.
pub fn notice_prompt(request: &DraftRequest) -> String {
    format!(
        "Você é um assistente de condomínio inteligente.\n\
         Escreva um aviso para os moradores sobre o seguinte tópico: \"{topic}\".\n\
         O tom deve ser: {tone}.\n\
         {LENGTH_INSTRUCTION}\n\
         {NO_GREETING_INSTRUCTION}\n",
        topic = request.topic(),
        tone = request.tone().phrase(),
    )
}

/// Render the classification instruction for a maintenance request.
pub fn triage_prompt(request: &TriageRequest) -> String {
    format!(
        "Analise a seguinte solicitação de manutenção de condomínio: \"{description}\".\n\
         \n\
         Retorne APENAS um objeto JSON (sem markdown) com duas propriedades:\n\
         1. \"priority\": deve ser \"low\", \"medium\", ou \"high\" baseado na urgência \
         (vazamentos, fogo, segurança são high).\n\
         2. \"category\": uma palavra classificando o problema \
         (ex: Elétrica, Hidráulica, Estrutura, Limpeza).\n",
        description = request.description(),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
