//! UseCase: publish presence statistics.
//!
//! Computes a snapshot from the registry and pushes a `stats` event to every
//! Joined session. Event-driven only: the handler invokes this after every
//! successful join and after every close that released an identity, never on
//! a timer, so presence stays strictly consistent with membership.

use std::sync::Arc;

use crate::domain::{PresenceSnapshot, SessionRegistry};
use crate::infrastructure::dto::ws::StatsMessage;

/// Compute and broadcast the current presence snapshot
pub struct PublishPresenceUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl PublishPresenceUseCase {
    /// Create a new PublishPresenceUseCase
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the publish.
    ///
    /// # Returns
    ///
    /// The snapshot that was pushed, for callers that also want to inspect it
    pub async fn execute(&self) -> PresenceSnapshot {
        let participants = self.registry.snapshot().await;
        let snapshot = PresenceSnapshot::from_participants(&participants);

        let payload = serde_json::to_string(&StatsMessage::from(&snapshot)).unwrap();
        let delivered = self.registry.broadcast(payload).await;
        tracing::debug!(
            "Published presence ({} joined) to {} session(s)",
            snapshot.count(),
            delivered
        );

        snapshot
    }
}
