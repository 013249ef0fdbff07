//! Core domain models for the chat session layer.

use serde::{Deserialize, Serialize};

use super::value_object::{Identity, MessageContent, Timestamp};

/// Represents a joined participant in the chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant identity
    pub identity: Identity,
    /// Timestamp when the participant joined
    pub joined_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(identity: Identity, joined_at: Timestamp) -> Self {
        Self {
            identity,
            joined_at,
        }
    }
}

/// Represents a chat message in the domain model.
///
/// Immutable: constructed once at routing time with a server-assigned
/// timestamp, then broadcast as-is. Messages are not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender's identity
    pub sender: Identity,
    /// Message content
    pub content: MessageContent,
    /// Timestamp when the message was routed
    pub timestamp: Timestamp,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(sender: Identity, content: MessageContent, timestamp: Timestamp) -> Self {
        Self {
            sender,
            content,
            timestamp,
        }
    }
}

/// Point-in-time view of chat membership.
///
/// Derived from the registry on every membership change and pushed to all
/// joined sessions; never stored longer than one publish cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSnapshot {
    /// Joined identities in join order
    pub people: Vec<Identity>,
}

impl PresenceSnapshot {
    /// Build a snapshot from a join-ordered participant list
    pub fn from_participants(participants: &[Participant]) -> Self {
        Self {
            people: participants.iter().map(|p| p.identity.clone()).collect(),
        }
    }

    /// Number of joined participants
    pub fn count(&self) -> usize {
        self.people.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(s: &str) -> Identity {
        Identity::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_chat_message_new() {
        // given:
        let sender = identity("alice@x.com");
        let content = MessageContent::new("Hello!".to_string()).unwrap();

        // when:
        let message = ChatMessage::new(sender.clone(), content.clone(), Timestamp::new(3000));

        // then:
        assert_eq!(message.sender, sender);
        assert_eq!(message.content, content);
        assert_eq!(message.timestamp, Timestamp::new(3000));
    }

    #[test]
    fn test_presence_snapshot_preserves_join_order() {
        // given:
        let participants = vec![
            Participant::new(identity("charlie@x.com"), Timestamp::new(1000)),
            Participant::new(identity("alice@x.com"), Timestamp::new(2000)),
            Participant::new(identity("bob@x.com"), Timestamp::new(3000)),
        ];

        // when:
        let snapshot = PresenceSnapshot::from_participants(&participants);

        // then: join order, not lexicographic order
        assert_eq!(snapshot.count(), 3);
        assert_eq!(snapshot.people[0].as_str(), "charlie@x.com");
        assert_eq!(snapshot.people[1].as_str(), "alice@x.com");
        assert_eq!(snapshot.people[2].as_str(), "bob@x.com");
    }

    #[test]
    fn test_presence_snapshot_empty() {
        // when:
        let snapshot = PresenceSnapshot::from_participants(&[]);

        // then:
        assert_eq!(snapshot.count(), 0);
        assert!(snapshot.people.is_empty());
    }
}
