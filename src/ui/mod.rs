//! UI layer: HTTP/WebSocket surface of the session layer.

pub mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run};
