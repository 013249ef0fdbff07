//! HTTP API response DTOs for the chat session layer.

use serde::{Deserialize, Serialize};

/// Presence snapshot for the presence endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceDto {
    pub people: Vec<ParticipantDto>,
    pub count: usize,
}

/// One joined participant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub identity: String,
    pub joined_at: String, // ISO 8601
}
