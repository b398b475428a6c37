use std::sync::Arc;

use condofacil_ai::Assistant;
use condofacil_core::board::Board;
use condofacil_mail::MailRelay;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Notice drafting and maintenance triage.
    pub assistant: Arc<Assistant>,
    /// Contact-form and direct-message relay.
    pub mail: Arc<MailRelay>,
    /// Notices, maintenance requests and amenities (process memory only).
    pub board: Arc<RwLock<Board>>,
}

impl AppState {
    pub fn new(config: ServerConfig, assistant: Assistant, mail: MailRelay, board: Board) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
            mail: Arc::new(mail),
            board: Arc::new(RwLock::new(board)),
        }
    }
}
