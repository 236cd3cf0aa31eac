//! Application state

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Cloneable for use as Axum state; the config is wrapped in an Arc.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
