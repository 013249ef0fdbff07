//! In-memory SessionRegistry implementation.
//!
//! Implements the domain-layer `SessionRegistry` trait with a single
//! `tokio::sync::Mutex` guarding both the session map and the join-ordered
//! participant list. Holding one lock for both keeps every state transition
//! atomic: concurrent binds for the same identity are serialized, and a
//! close observed by one caller is observed by all subsequent calls.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    EventSender, Identity, Participant, RegistryError, SessionId, SessionRegistry, Timestamp,
};

/// One live connection as tracked by the registry.
///
/// `identity == None` is the Connected state, `Some` is Joined. Closed
/// sessions are removed from the map, which makes `close` naturally
/// idempotent.
struct SessionEntry {
    sender: EventSender,
    identity: Option<Identity>,
    #[allow(dead_code)]
    connected_at: Timestamp,
}

#[derive(Default)]
struct RegistryInner {
    sessions: HashMap<SessionId, SessionEntry>,
    /// Joined participants in join order.
    participants: Vec<Participant>,
}

/// In-memory session registry.
#[derive(Default)]
pub struct InMemorySessionRegistry {
    inner: Mutex<RegistryInner>,
}

impl InMemorySessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessionRegistry {
    async fn connect(&self, session_id: SessionId, sender: EventSender, connected_at: Timestamp) {
        let mut inner = self.inner.lock().await;
        inner.sessions.insert(
            session_id,
            SessionEntry {
                sender,
                identity: None,
                connected_at,
            },
        );
    }

    async fn bind(
        &self,
        session_id: &SessionId,
        identity: Identity,
        joined_at: Timestamp,
    ) -> Result<(), RegistryError> {
        let mut guard = self.inner.lock().await;
        let inner = &mut *guard;

        // Identity check comes before the session check so a duplicate join
        // is reported as such even when racing with a close.
        if inner.participants.iter().any(|p| p.identity == identity) {
            return Err(RegistryError::IdentityTaken(identity.into_string()));
        }

        let Some(entry) = inner.sessions.get_mut(session_id) else {
            return Err(RegistryError::SessionNotConnected(session_id.to_string()));
        };
        if entry.identity.is_some() {
            return Err(RegistryError::AlreadyBound(session_id.to_string()));
        }

        entry.identity = Some(identity.clone());
        inner
            .participants
            .push(Participant::new(identity, joined_at));

        Ok(())
    }

    async fn close(&self, session_id: &SessionId) -> Option<Identity> {
        let mut inner = self.inner.lock().await;

        let entry = inner.sessions.remove(session_id)?;
        let identity = entry.identity?;

        inner.participants.retain(|p| p.identity != identity);
        Some(identity)
    }

    async fn joined_identity(&self, session_id: &SessionId) -> Option<Identity> {
        let inner = self.inner.lock().await;
        inner
            .sessions
            .get(session_id)
            .and_then(|entry| entry.identity.clone())
    }

    async fn snapshot(&self) -> Vec<Participant> {
        let inner = self.inner.lock().await;
        inner.participants.clone()
    }

    async fn broadcast(&self, payload: String) -> usize {
        let inner = self.inner.lock().await;

        let mut delivered = 0;
        for entry in inner.sessions.values() {
            let Some(identity) = &entry.identity else {
                continue; // Connected but not Joined
            };
            if entry.sender.send(payload.clone()).is_ok() {
                delivered += 1;
            } else {
                tracing::warn!("Dropping event for '{}': receiver gone", identity);
            }
        }
        delivered
    }

    async fn session_count(&self) -> usize {
        let inner = self.inner.lock().await;
        inner.sessions.len()
    }
}
