//! Presence-aware WebSocket chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server -- --host 127.0.0.1 --port 3000
//! ```

use clap::Parser;

use chatzilla::ServerConfig;
use chatzilla::common::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = chatzilla::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
