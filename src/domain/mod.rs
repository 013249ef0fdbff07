//! Domain layer for the chat session layer.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod registry;
pub mod value_object;

pub use entity::{ChatMessage, Participant, PresenceSnapshot};
pub use error::{RegistryError, ValueObjectError};
pub use factory::SessionIdFactory;
pub use registry::{EventSender, SessionRegistry};
pub use value_object::{Identity, MessageContent, SessionId, Timestamp};

#[cfg(test)]
pub use registry::MockSessionRegistry;
