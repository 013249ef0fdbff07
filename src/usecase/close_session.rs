//! UseCase: close a session.
//!
//! Transport disconnect and explicit leave both funnel through here. Close
//! is idempotent and acts as a cancellation barrier: after the registry
//! observes the close, no later join or send for the session can mutate
//! state, and a bound identity is released exactly once.

use std::sync::Arc;

use crate::domain::{Identity, SessionId, SessionRegistry};

/// Close a session and release its identity
pub struct CloseSessionUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl CloseSessionUseCase {
    /// Create a new CloseSessionUseCase
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the close.
    ///
    /// # Returns
    ///
    /// The released identity when this call closed a Joined session, `None`
    /// when the session was Connected-only or already closed. The caller
    /// publishes presence only on `Some`, since only then did membership
    /// change.
    pub async fn execute(&self, session_id: &SessionId) -> Option<Identity> {
        let released = self.registry.close(session_id).await;
        match &released {
            Some(identity) => {
                tracing::info!("Session '{}' closed, released '{}'", session_id, identity);
            }
            None => {
                tracing::debug!("Session '{}' closed with no identity bound", session_id);
            }
        }
        released
    }
}
