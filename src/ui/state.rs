//! Shared server state.

use std::sync::Arc;

use crate::domain::SessionRegistry;

/// Shared application state
pub struct AppState {
    /// Session registry, the single serialization point for session state
    pub registry: Arc<dyn SessionRegistry>,
}

impl AppState {
    /// Create application state over a registry implementation
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }
}
