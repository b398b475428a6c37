//! Maintenance triage: priority levels, classification records, and the
//! interpretation of classification replies.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fallback::FallbackReason;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Category used when a request could not be classified.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Matches opening (```` ```json ````) and closing (```` ``` ````) code-fence markers.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Urgency level of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Priority and category assigned to a maintenance request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub priority: Priority,
    pub category: String,
}

impl Default for TriageResult {
    fn default() -> Self {
        Self {
            priority: Priority::Medium,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Outcome of a triage call: always a usable record, plus the reason when
/// the record is the default rather than a model classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triage {
    #[serde(flatten)]
    pub result: TriageResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackReason>,
}

impl Triage {
    /// The default classification, tagged with why it was used.
    pub fn fallback(reason: FallbackReason) -> Self {
        Self {
            result: TriageResult::default(),
            fallback: Some(reason),
        }
    }

    pub fn classified(result: TriageResult) -> Self {
        Self {
            result,
            fallback: None,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.fallback.is_none()
    }
}

// ---------------------------------------------------------------------------
// Interpretation
// ---------------------------------------------------------------------------

/// Remove every code-fence marker and trim surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// Parse a cleaned reply into a [`TriageResult`].
///
/// Rejects priorities outside the enumerated domain and blank categories.
pub fn parse_triage(cleaned: &str) -> Result<TriageResult, serde_json::Error> {
    let mut result: TriageResult = serde_json::from_str(cleaned)?;
    let category = result.category.trim();
    if category.is_empty() {
        return Err(serde::de::Error::custom("category must not be blank"));
    }
    result.category = category.to_string();
    Ok(result)
}

/// Interpret a triage reply. Absent text is treated as an empty object;
/// any parse failure yields the default record.
pub fn interpret_triage(raw: Option<&str>) -> Triage {
    let cleaned = strip_code_fences(raw.unwrap_or("{}"));
    match parse_triage(&cleaned) {
        Ok(result) => Triage::classified(result),
        Err(e) => {
            tracing::warn!(error = %e, "Could not parse triage reply, using default classification");
            Triage::fallback(FallbackReason::UnparseableReply)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
