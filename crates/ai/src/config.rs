use crate::api::DEFAULT_BASE_URL;

/// Model used for both drafting and triage.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Assistant configuration loaded from environment variables.
///
/// A missing credential is a supported state: the assistant then answers
/// every call with its placeholder without contacting the provider.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Provider credential; `None` disables outbound calls.
    pub api_key: Option<String>,
    /// Model identifier (default: `gemini-2.5-flash`).
    pub model: String,
    /// API root URL.
    pub base_url: String,
}

impl AssistantConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                                        |
    /// |-------------------|------------------------------------------------|
    /// | `GEMINI_API_KEY`  | falls back to `API_KEY`, else unset            |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash`                             |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok();
        Self::new(
            api_key,
            std::env::var("GEMINI_MODEL").ok(),
            std::env::var("GEMINI_BASE_URL").ok(),
        )
    }

    /// Build a configuration, treating blank values as unset.
    pub fn new(api_key: Option<String>, model: Option<String>, base_url: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            api_key: non_blank(api_key),
            model: non_blank(model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: non_blank(base_url).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
