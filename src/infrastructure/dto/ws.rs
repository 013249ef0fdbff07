//! WebSocket event DTOs for the chat session layer.
//!
//! JSON realization of the event contract: client events are a `type`-tagged
//! union, server events are one struct per message type with a kebab-case
//! `type` discriminator.

use serde::{Deserialize, Serialize};

use crate::domain::{ChatMessage, PresenceSnapshot};

/// Server event type discriminator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    JoinAck,
    MessageAck,
    Message,
    Stats,
}

/// Events sent by the client over the WebSocket
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Request to join the chat with the given identity
    Join { identity: String },
    /// Request to broadcast a chat message
    Message { content: String },
}

/// Acknowledgement of a join request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinAckMessage {
    pub r#type: MessageType,
    pub joined: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Stable kebab-case rejection code, present when `joined` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl JoinAckMessage {
    pub fn accepted(display_name: String) -> Self {
        Self {
            r#type: MessageType::JoinAck,
            joined: true,
            display_name: Some(display_name),
            reason: None,
        }
    }

    pub fn rejected(reason: &str) -> Self {
        Self {
            r#type: MessageType::JoinAck,
            joined: false,
            display_name: None,
            reason: Some(reason.to_string()),
        }
    }
}

/// Acknowledgement of a message send request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageAckMessage {
    pub r#type: MessageType,
    pub sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<ChatMessagePayload>,
    /// Stable kebab-case rejection code, present when `sent` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MessageAckMessage {
    pub fn accepted(message: ChatMessagePayload) -> Self {
        Self {
            r#type: MessageType::MessageAck,
            sent: true,
            message: Some(message),
            reason: None,
        }
    }

    pub fn rejected(reason: &str) -> Self {
        Self {
            r#type: MessageType::MessageAck,
            sent: false,
            message: None,
            reason: Some(reason.to_string()),
        }
    }
}

/// Chat message broadcast to all joined sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessagePayload {
    pub r#type: MessageType,
    pub sender: String,
    pub content: String,
    /// Unix timestamp (milliseconds since epoch, UTC)
    pub timestamp: i64,
}

impl From<&ChatMessage> for ChatMessagePayload {
    fn from(message: &ChatMessage) -> Self {
        Self {
            r#type: MessageType::Message,
            sender: message.sender.as_str().to_string(),
            content: message.content.as_str().to_string(),
            timestamp: message.timestamp.value(),
        }
    }
}

/// Presence statistics broadcast after every membership change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsMessage {
    pub r#type: MessageType,
    /// Joined identities in join order
    pub people: Vec<String>,
    pub count: usize,
}

impl From<&PresenceSnapshot> for StatsMessage {
    fn from(snapshot: &PresenceSnapshot) -> Self {
        Self {
            r#type: MessageType::Stats,
            people: snapshot
                .people
                .iter()
                .map(|identity| identity.as_str().to_string())
                .collect(),
            count: snapshot.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Identity, MessageContent, Timestamp};

    #[test]
    fn test_client_event_parse_join() {
        // given:
        let json = r#"{"type":"join","identity":"alice@x.com"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        assert!(matches!(event, ClientEvent::Join { identity } if identity == "alice@x.com"));
    }

    #[test]
    fn test_client_event_parse_message() {
        // given:
        let json = r#"{"type":"message","content":"hi"}"#;

        // when:
        let event: ClientEvent = serde_json::from_str(json).unwrap();

        // then:
        assert!(matches!(event, ClientEvent::Message { content } if content == "hi"));
    }

    #[test]
    fn test_client_event_parse_unknown_type_fails() {
        // given:
        let json = r#"{"type":"leave"}"#;

        // when:
        let result = serde_json::from_str::<ClientEvent>(json);

        // then:
        assert!(result.is_err());
    }

    #[test]
    fn test_join_ack_rejected_serialization() {
        // given:
        let ack = JoinAckMessage::rejected("already-joined");

        // when:
        let json = serde_json::to_value(&ack).unwrap();

        // then: display_name is omitted, not null
        assert_eq!(json["type"], "join-ack");
        assert_eq!(json["joined"], false);
        assert_eq!(json["reason"], "already-joined");
        assert!(json.get("display_name").is_none());
    }

    #[test]
    fn test_chat_message_payload_from_domain() {
        // given:
        let message = ChatMessage::new(
            Identity::new("alice@x.com".to_string()).unwrap(),
            MessageContent::new("hi".to_string()).unwrap(),
            Timestamp::new(42),
        );

        // when:
        let payload = ChatMessagePayload::from(&message);
        let json = serde_json::to_value(&payload).unwrap();

        // then:
        assert_eq!(json["type"], "message");
        assert_eq!(json["sender"], "alice@x.com");
        assert_eq!(json["content"], "hi");
        assert_eq!(json["timestamp"], 42);
    }

    #[test]
    fn test_stats_message_from_snapshot() {
        // given:
        let snapshot = PresenceSnapshot {
            people: vec![
                Identity::new("alice@x.com".to_string()).unwrap(),
                Identity::new("bob@x.com".to_string()).unwrap(),
            ],
        };

        // when:
        let stats = StatsMessage::from(&snapshot);
        let json = serde_json::to_value(&stats).unwrap();

        // then:
        assert_eq!(json["type"], "stats");
        assert_eq!(json["people"][0], "alice@x.com");
        assert_eq!(json["people"][1], "bob@x.com");
        assert_eq!(json["count"], 2);
    }
}
