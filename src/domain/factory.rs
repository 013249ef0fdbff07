//! Domain factories for creating domain entities and value objects.

use super::SessionId;

/// Factory for generating SessionId instances.
///
/// Encapsulates identifier generation, separating the generation concern
/// from the SessionId type itself.
pub struct SessionIdFactory;

impl SessionIdFactory {
    /// Generate a new SessionId with a random UUID v4.
    pub fn generate() -> SessionId {
        SessionId::from_uuid(uuid::Uuid::new_v4())
    }
}
