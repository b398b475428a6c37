//! Generative-AI client and the notice/triage assistant built on it.
//!
//! - [`api`]: REST wrapper for the Gemini `generateContent` endpoint.
//! - [`generator`]: the [`TextGenerator`] seam the assistant calls through.
//! - [`assistant`]: draft and triage operations that never fail.
//! - [`config`]: credential and model selection from the environment.

pub mod api;
pub mod assistant;
pub mod config;
pub mod generator;

#[cfg(test)]
mod test_support;

pub use assistant::Assistant;
pub use config::AssistantConfig;
pub use generator::{GenerateError, GeminiGenerator, TextGenerator};
