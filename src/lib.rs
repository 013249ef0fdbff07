//! Presence-aware real-time chat session layer.
//!
//! The component behind the `/chat` endpoint: tracks joined participants,
//! broadcasts chat messages to all joined sessions and publishes presence
//! statistics after every membership change.

pub mod common;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::{router, run};
