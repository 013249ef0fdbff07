//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Identity validation error
    #[error("Identity cannot be empty")]
    IdentityEmpty,

    /// Identity too long error
    #[error("Identity cannot exceed {max} characters (got {actual})")]
    IdentityTooLong { max: usize, actual: usize },

    /// MessageContent validation error
    #[error("MessageContent cannot be empty")]
    MessageContentEmpty,

    /// MessageContent too long error
    #[error("MessageContent cannot exceed {max} characters (got {actual})")]
    MessageContentTooLong { max: usize, actual: usize },
}

/// Errors raised by session registry state transitions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identity is already held by a live session
    #[error("identity '{0}' is already joined")]
    IdentityTaken(String),

    /// The session already holds an identity (no re-join)
    #[error("session '{0}' already has an identity bound")]
    AlreadyBound(String),

    /// The session is unknown or was closed
    #[error("session '{0}' is not connected")]
    SessionNotConnected(String),
}
