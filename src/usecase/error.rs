//! UseCase layer error definitions.
//!
//! All variants are rejected-request outcomes reported to the caller through
//! the operation's result; none of them tears down a session. Each carries a
//! stable kebab-case code for the wire-level acknowledgement.

use thiserror::Error;

/// Outcomes of a rejected join request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// The identity is already held by a live session, or this session
    /// already joined
    #[error("identity is already joined")]
    AlreadyJoined,

    /// The identity is empty, whitespace-only or oversized
    #[error("identity is empty or malformed")]
    InvalidIdentity,

    /// The session was closed while the join was in flight
    #[error("session is closed")]
    SessionClosed,
}

impl JoinError {
    /// Stable code reported in the join acknowledgement
    pub fn code(&self) -> &'static str {
        match self {
            Self::AlreadyJoined => "already-joined",
            Self::InvalidIdentity => "invalid-identity",
            Self::SessionClosed => "session-closed",
        }
    }
}

/// Outcomes of a rejected message send request
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The session has not joined yet
    #[error("session has not joined")]
    NotJoined,

    /// The content is blank after trimming
    #[error("message content is empty")]
    EmptyMessage,

    /// The content exceeds the maximum length
    #[error("message content is too long")]
    ContentTooLong,
}

impl SendError {
    /// Stable code reported in the message acknowledgement
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotJoined => "not-joined",
            Self::EmptyMessage => "empty-message",
            Self::ContentTooLong => "content-too-long",
        }
    }
}
