//! Server state.

use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::session::Session;

/// Application state shared across handlers.
///
/// Exactly one session: handlers hold the lock for the whole mutation and
/// the derivation of the response, so every response is consistent.
pub struct AppState {
    pub config: ServerConfig,
    pub session: RwLock<Session>,
}

impl AppState {
    pub fn new(config: ServerConfig, session: Session) -> Self {
        Self {
            config,
            session: RwLock::new(session),
        }
    }
}
