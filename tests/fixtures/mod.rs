//! Shared test fixtures.

use std::sync::Arc;

use chatzilla::infrastructure::registry::InMemorySessionRegistry;
use chatzilla::ui::state::AppState;

/// A chat server bound to an ephemeral port on localhost.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Bind a fresh server and start serving in the background.
    pub async fn start() -> Self {
        let registry = Arc::new(InMemorySessionRegistry::new());
        let state = Arc::new(AppState::new(registry));
        let app = chatzilla::router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { port }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/chat", self.port)
    }
}
