//! Room identity: chat handle to canonical room key, and sender membership.
//!
//! Identity is case-insensitive (`Alice:bob` and `bob:alice` share a room)
//! while membership is checked against the handle exactly as written, so a
//! sender must match one participant token case for case.

use pairchat_types::chat::{HANDLE_SEPARATOR, RoomKey};
use pairchat_types::error::ChatError;

/// Split a handle into its two participant tokens.
fn participants(handle: &str) -> Result<(&str, &str), ChatError> {
    let mut parts = handle.split(HANDLE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) if !first.is_empty() && !second.is_empty() => {
            Ok((first, second))
        }
        _ => Err(ChatError::InvalidChatHandle(handle.to_string())),
    }
}

/// Resolve a chat handle into the room key shared by both orderings of its
/// participants.
pub fn resolve(handle: &str) -> Result<RoomKey, ChatError> {
    let (first, second) = participants(handle)?;
    let first = first.to_lowercase();
    let second = second.to_lowercase();

    let key = if first > second {
        format!("{second}{HANDLE_SEPARATOR}{first}")
    } else {
        format!("{first}{HANDLE_SEPARATOR}{second}")
    };
    Ok(RoomKey::from_canonical(key))
}

/// Check that `sender` is one of the two participants named by `handle`.
///
/// Compared against the raw tokens; no case folding.
pub fn validate_membership(handle: &str, sender: &str) -> Result<(), ChatError> {
    let (first, second) = participants(handle)?;
    if sender != first && sender != second {
        return Err(ChatError::SenderNotInChat {
            sender: sender.to_string(),
        });
    }
    Ok(())
}
