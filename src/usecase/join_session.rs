//! UseCase: join a session to the chat.
//!
//! Validates the raw identity, then performs the atomic check-and-bind in
//! the registry. Exactly one of several concurrent joins for the same
//! identity can succeed; all others observe `AlreadyJoined`. On any failure
//! no state changes, so the caller may safely retry with a new identity.

use std::sync::Arc;

use crate::common::time::now_millis;
use crate::domain::{Identity, RegistryError, SessionId, SessionRegistry, Timestamp};

use super::error::JoinError;

/// Join a Connected session to the chat under an identity
pub struct JoinSessionUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl JoinSessionUseCase {
    /// Create a new JoinSessionUseCase
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the join.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The session attempting to join
    /// * `raw_identity` - Client-supplied identity string, validated here
    ///
    /// # Returns
    ///
    /// * `Ok(Identity)` - The bound identity
    /// * `Err(JoinError)` - The join was rejected; state is unchanged
    pub async fn execute(
        &self,
        session_id: &SessionId,
        raw_identity: String,
    ) -> Result<Identity, JoinError> {
        let identity = Identity::new(raw_identity).map_err(|_| JoinError::InvalidIdentity)?;

        let joined_at = Timestamp::new(now_millis());
        self.registry
            .bind(session_id, identity.clone(), joined_at)
            .await
            .map_err(|e| match e {
                RegistryError::IdentityTaken(_) | RegistryError::AlreadyBound(_) => {
                    JoinError::AlreadyJoined
                }
                RegistryError::SessionNotConnected(_) => JoinError::SessionClosed,
            })?;

        tracing::info!("Session '{}' joined as '{}'", session_id, identity);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SessionIdFactory;
    use crate::infrastructure::registry::InMemorySessionRegistry;
    use tokio::sync::mpsc;

    async fn connect(registry: &Arc<InMemorySessionRegistry>) -> SessionId {
        let session_id = SessionIdFactory::generate();
        let (tx, _rx) = mpsc::unbounded_channel();
        registry
            .connect(session_id.clone(), tx, Timestamp::new(1000))
            .await;
        session_id
    }

    #[tokio::test]
    async fn test_join_success() {
        // given:
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = JoinSessionUseCase::new(registry.clone());
        let session_id = connect(&registry).await;

        // when:
        let result = usecase
            .execute(&session_id, "alice@x.com".to_string())
            .await;

        // then:
        assert!(result.is_ok());
        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].identity.as_str(), "alice@x.com");
    }

    #[tokio::test]
    async fn test_join_invalid_identity() {
        // given:
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = JoinSessionUseCase::new(registry.clone());
        let session_id = connect(&registry).await;

        // when: whitespace-only identity
        let result = usecase.execute(&session_id, "   ".to_string()).await;

        // then:
        assert_eq!(result, Err(JoinError::InvalidIdentity));
        assert!(registry.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_join_duplicate_identity_fails() {
        // given: alice already joined from another session
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = JoinSessionUseCase::new(registry.clone());
        let session_a = connect(&registry).await;
        let session_b = connect(&registry).await;
        usecase
            .execute(&session_a, "alice@x.com".to_string())
            .await
            .unwrap();

        // when:
        let result = usecase
            .execute(&session_b, "alice@x.com".to_string())
            .await;

        // then: second claimant is rejected, snapshot unchanged
        assert_eq!(result, Err(JoinError::AlreadyJoined));
        assert_eq!(registry.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_join_twice_from_same_session_fails() {
        // given:
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = JoinSessionUseCase::new(registry.clone());
        let session_id = connect(&registry).await;
        usecase
            .execute(&session_id, "alice@x.com".to_string())
            .await
            .unwrap();

        // when: re-join with a different identity
        let result = usecase.execute(&session_id, "bob@x.com".to_string()).await;

        // then:
        assert_eq!(result, Err(JoinError::AlreadyJoined));
        assert_eq!(registry.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_join_closed_session_fails() {
        // given: a session closed before the join lands
        let registry = Arc::new(InMemorySessionRegistry::new());
        let usecase = JoinSessionUseCase::new(registry.clone());
        let session_id = connect(&registry).await;
        registry.close(&session_id).await;

        // when:
        let result = usecase
            .execute(&session_id, "alice@x.com".to_string())
            .await;

        // then:
        assert_eq!(result, Err(JoinError::SessionClosed));
        assert!(registry.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_joins_same_identity_exactly_one_wins() {
        // given: many sessions racing to claim one identity
        let registry = Arc::new(InMemorySessionRegistry::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = registry.clone();
            let session_id = connect(&registry).await;
            handles.push(tokio::spawn(async move {
                let usecase = JoinSessionUseCase::new(registry);
                usecase.execute(&session_id, "alice@x.com".to_string()).await
            }));
        }

        // when:
        let mut successes = 0;
        let mut already_joined = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(JoinError::AlreadyJoined) => already_joined += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        // then: exactly one winner, identity appears once
        assert_eq!(successes, 1);
        assert_eq!(already_joined, 7);
        assert_eq!(registry.snapshot().await.len(), 1);
    }
}
