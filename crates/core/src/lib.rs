//! Domain types and pure logic for the Condomínio Fácil backend.
//!
//! - [`prompt`]: instruction templates sent to the language model.
//! - [`draft`] / [`triage`]: interpretation of model replies.
//! - [`board`]: in-memory notice board, maintenance queue and amenities.
//! - [`contact`]: validated payloads accepted by the mail relay.

pub mod board;
pub mod contact;
pub mod draft;
pub mod error;
pub mod fallback;
pub mod prompt;
pub mod triage;
pub mod types;
