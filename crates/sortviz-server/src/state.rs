//! Shared application state.
//!
//! Requests share nothing mutable; the state only carries the immutable
//! server configuration so handlers can apply request limits.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            config: Arc::new(config),
        }
    }
}
