//! UseCase: route a chat message.
//!
//! Accepts an outbound message from a Joined session, assigns the server
//! timestamp and fans the message out to every Joined session, including the
//! sender. Fan-out is best-effort at-most-once: a recipient whose channel is
//! gone is skipped and the sender is never told about partial delivery.

use std::sync::Arc;

use crate::common::time::now_millis;
use crate::domain::{
    ChatMessage, MessageContent, SessionId, SessionRegistry, Timestamp, ValueObjectError,
};
use crate::infrastructure::dto::ws::ChatMessagePayload;

use super::error::SendError;

/// Broadcast a message from a joined session to all joined sessions
pub struct RouteMessageUseCase {
    registry: Arc<dyn SessionRegistry>,
}

impl RouteMessageUseCase {
    /// Create a new RouteMessageUseCase
    pub fn new(registry: Arc<dyn SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Execute the send.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The sending session; must be in the Joined state
    /// * `raw_content` - Client-supplied content, trimmed and validated here
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - The broadcast message, echoed in the ack
    /// * `Err(SendError)` - The send was rejected; nothing was broadcast
    pub async fn execute(
        &self,
        session_id: &SessionId,
        raw_content: String,
    ) -> Result<ChatMessage, SendError> {
        let Some(sender) = self.registry.joined_identity(session_id).await else {
            return Err(SendError::NotJoined);
        };

        let content = MessageContent::new(raw_content).map_err(|e| match e {
            ValueObjectError::MessageContentTooLong { .. } => SendError::ContentTooLong,
            _ => SendError::EmptyMessage,
        })?;

        let message = ChatMessage::new(sender, content, Timestamp::new(now_millis()));

        let payload = serde_json::to_string(&ChatMessagePayload::from(&message)).unwrap();
        let delivered = self.registry.broadcast(payload).await;
        tracing::debug!(
            "Broadcast message from '{}' to {} session(s)",
            message.sender,
            delivered
        );

        Ok(message)
    }
}
