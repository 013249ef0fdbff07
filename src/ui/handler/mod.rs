//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod ws;

pub use http::{get_presence, health_check};
pub use ws::chat_handler;
