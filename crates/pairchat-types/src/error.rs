use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by chat operations (send, pull).
///
/// Every variant is terminal for the operation that raised it; nothing in
/// the core retries.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid chat handle '{0}', should be in the format of user1:user2")]
    InvalidChatHandle(String),

    #[error("sender '{sender}' not in the chat room")]
    SenderNotInChat { sender: String },

    #[error("message store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("message serialization fault: {0}")]
    SerializationFault(String),
}

/// Errors from the ordered collection backing a room log (used by the
/// `OrderedCollection` trait in pairchat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error: {0}")]
    Connection(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("store call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<RepositoryError> for ChatError {
    fn from(e: RepositoryError) -> Self {
        ChatError::StoreUnavailable(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_handle_display() {
        let err = ChatError::InvalidChatHandle("alice-bob".to_string());
        assert_eq!(
            err.to_string(),
            "invalid chat handle 'alice-bob', should be in the format of user1:user2"
        );
    }

    #[test]
    fn test_sender_not_in_chat_display() {
        let err = ChatError::SenderNotInChat {
            sender: "carol".to_string(),
        };
        assert_eq!(err.to_string(), "sender 'carol' not in the chat room");
    }

    #[test]
    fn test_repository_error_becomes_store_unavailable() {
        let err: ChatError = RepositoryError::Timeout(Duration::from_secs(1)).into();
        assert!(matches!(err, ChatError::StoreUnavailable(_)));
        assert!(err.to_string().contains("timed out"));
    }
}
