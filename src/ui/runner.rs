//! Router construction and server entry point.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    infrastructure::registry::InMemorySessionRegistry,
    ui::{
        handler::{chat_handler, get_presence, health_check},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the application router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", get(chat_handler))
        .route("/api/health", get(health_check))
        .route("/api/presence", get(get_presence))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the chat server until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), std::io::Error> {
    let registry = Arc::new(InMemorySessionRegistry::new());
    let state = Arc::new(AppState::new(registry));
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}
