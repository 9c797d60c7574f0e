//! Chat domain types: room keys, stored messages, rendered messages.
//!
//! A conversation is named by a client-supplied handle (`alice:bob`) and
//! stored under a canonical [`RoomKey`]. Messages are written to the room's
//! ordered log in their [`Message`] form and read back out as
//! [`ChatMessage`], labelled with the handle the caller asked for.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the two participants in a chat handle.
pub const HANDLE_SEPARATOR: char = ':';

/// Canonical, order-independent identifier of a two-party conversation.
///
/// Built only by the room identity resolver in `pairchat-core`; the inner
/// string is always `lower_a:lower_b` with `lower_a <= lower_b`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomKey(String);

impl RoomKey {
    /// Wrap an already-canonical key. Callers outside the resolver should
    /// only use this for keys read back from storage.
    pub fn from_canonical(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A message as stored in a room log.
///
/// Serialized as the member of the ordered collection; the field names are
/// part of the persisted format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    #[serde(rename = "message")]
    pub text: String,
    /// Seconds since the Unix epoch. Doubles as the ordering score.
    #[serde(rename = "timestamp")]
    pub sent_at: i64,
}

/// A message as returned to a client, labelled with the chat handle the
/// client used (not the canonical room key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub chat: String,
    pub sender: String,
    pub text: String,
    pub sent_at: i64,
}

impl ChatMessage {
    pub fn from_stored(chat: &str, message: Message) -> Self {
        Self {
            chat: chat.to_string(),
            sender: message.sender,
            text: message.text,
            sent_at: message.sent_at,
        }
    }
}

/// Inbound send request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    pub chat: String,
    pub sender: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_message_wire_names() {
        let msg = Message {
            sender: "alice".to_string(),
            text: "hi".to_string(),
            sent_at: 100,
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sender": "alice", "message": "hi", "timestamp": 100})
        );
    }

    #[test]
    fn test_chat_message_uses_camel_case() {
        let msg = ChatMessage::from_stored(
            "Bob:alice",
            Message {
                sender: "alice".to_string(),
                text: "hey".to_string(),
                sent_at: 42,
            },
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["chat"], "Bob:alice");
        assert_eq!(json["sentAt"], 42);
        assert!(json.get("sent_at").is_none());
    }

    #[test]
    fn test_room_key_display() {
        let key = RoomKey::from_canonical("alice:bob");
        assert_eq!(key.to_string(), "alice:bob");
        assert_eq!(key.as_str(), "alice:bob");
    }
}
