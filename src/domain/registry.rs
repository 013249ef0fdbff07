//! Session registry abstraction.
//!
//! The registry is the single serialization point for session and identity
//! state: every join, close and fan-out goes through one implementation of
//! this trait, which must make its state transitions atomic. UseCase code
//! depends on the trait, not on a concrete implementation.

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

#[cfg(test)]
use mockall::automock;

use super::{
    entity::Participant,
    error::RegistryError,
    value_object::{Identity, SessionId, Timestamp},
};

/// Outbound channel carrying serialized events to one session's writer task.
pub type EventSender = UnboundedSender<String>;

/// Tracks live sessions and the identities bound to them.
///
/// Invariant: an identity is present in the participant list if and only if
/// exactly one live session holds it. Implementations must serialize
/// `connect`/`bind`/`close` so concurrent bind attempts for one identity
/// never race.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Track a new transport connection in the Connected state.
    async fn connect(&self, session_id: SessionId, sender: EventSender, connected_at: Timestamp);

    /// Bind an identity to a Connected session, transitioning it to Joined.
    ///
    /// Atomic check-and-bind: fails with `IdentityTaken` when another live
    /// session holds the identity, `AlreadyBound` when the session already
    /// joined, and `SessionNotConnected` when the session is unknown or was
    /// closed concurrently. On failure no state changes.
    async fn bind(
        &self,
        session_id: &SessionId,
        identity: Identity,
        joined_at: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Close a session, releasing its identity if one was bound.
    ///
    /// Idempotent: returns the released identity on the call that actually
    /// closed a Joined session, `None` otherwise. After this returns, no
    /// further `bind` or `broadcast` delivery for the session can occur.
    async fn close(&self, session_id: &SessionId) -> Option<Identity>;

    /// Identity bound to the session, if it is in the Joined state.
    async fn joined_identity(&self, session_id: &SessionId) -> Option<Identity>;

    /// Joined participants in join order.
    async fn snapshot(&self) -> Vec<Participant>;

    /// Enqueue a serialized event to every Joined session.
    ///
    /// Best-effort at-most-once: a session whose channel is gone is skipped.
    /// Returns the number of sessions the event was enqueued for.
    async fn broadcast(&self, payload: String) -> usize;

    /// Number of live sessions (Connected or Joined).
    async fn session_count(&self) -> usize;
}
