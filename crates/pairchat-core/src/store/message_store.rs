//! Message persistence on top of an [`OrderedCollection`].
//!
//! Messages are stored as JSON members scored by their send time. Every call
//! into the collection runs under the store's deadline; a timeout or backend
//! failure surfaces as `StoreUnavailable` and is never retried here.

use std::future::Future;
use std::time::Duration;

use pairchat_types::chat::{Message, RoomKey};
use pairchat_types::error::{ChatError, RepositoryError};
use tracing::debug;

use super::collection::OrderedCollection;

pub struct MessageStore<C: OrderedCollection> {
    collection: C,
    timeout: Duration,
}

impl<C: OrderedCollection> MessageStore<C> {
    /// Create a store over `collection`, bounding each backend call by `timeout`.
    pub fn new(collection: C, timeout: Duration) -> Self {
        Self {
            collection,
            timeout,
        }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    async fn with_deadline<T>(
        &self,
        call: impl Future<Output = Result<T, RepositoryError>>,
    ) -> Result<T, ChatError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(ChatError::from),
            Err(_) => Err(RepositoryError::Timeout(self.timeout).into()),
        }
    }

    /// Append a message to the room log, ordered by `sent_at`.
    pub async fn append(&self, room_key: &RoomKey, message: &Message) -> Result<(), ChatError> {
        let member = serde_json::to_string(message)
            .map_err(|e| ChatError::SerializationFault(e.to_string()))?;

        self.with_deadline(self.collection.insert(room_key, message.sent_at, member))
            .await?;

        debug!(room_key = %room_key, sent_at = message.sent_at, "Message appended");
        Ok(())
    }

    /// Read the messages at positions `start..=end` of the room log.
    ///
    /// Ascending by send time, or descending when `reverse` is set. An empty
    /// room, or a `start` past the end, yields an empty vector.
    pub async fn range_read(
        &self,
        room_key: &RoomKey,
        start: u64,
        end: u64,
        reverse: bool,
    ) -> Result<Vec<Message>, ChatError> {
        if end < start {
            return Ok(Vec::new());
        }

        let members = self
            .with_deadline(self.collection.range(room_key, start, end, reverse))
            .await?;

        members
            .iter()
            .map(|raw| {
                serde_json::from_str::<Message>(raw)
                    .map_err(|e| ChatError::SerializationFault(format!("{e}: {raw}")))
            })
            .collect()
    }

    /// Probe the backing collection.
    pub async fn ping(&self) -> Result<(), ChatError> {
        self.with_deadline(self.collection.ping()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::VecCollection;

    fn store(collection: VecCollection) -> MessageStore<VecCollection> {
        MessageStore::new(collection, Duration::from_millis(200))
    }

    fn msg(sender: &str, text: &str, sent_at: i64) -> Message {
        Message {
            sender: sender.to_string(),
            text: text.to_string(),
            sent_at,
        }
    }

    fn key() -> RoomKey {
        RoomKey::from_canonical("alice:bob")
    }

    #[tokio::test]
    async fn test_append_then_read_in_time_order() {
        let store = store(VecCollection::default());
        store.append(&key(), &msg("bob", "second", 200)).await.unwrap();
        store.append(&key(), &msg("alice", "first", 100)).await.unwrap();
        store.append(&key(), &msg("alice", "third", 300)).await.unwrap();

        let asc = store.range_read(&key(), 0, 10, false).await.unwrap();
        let texts: Vec<&str> = asc.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);

        let desc = store.range_read(&key(), 0, 10, true).await.unwrap();
        let texts: Vec<&str> = desc.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_range_is_inclusive() {
        let store = store(VecCollection::default());
        for t in 1..=5 {
            store.append(&key(), &msg("alice", "m", t)).await.unwrap();
        }
        let window = store.range_read(&key(), 1, 3, false).await.unwrap();
        let times: Vec<i64> = window.iter().map(|m| m.sent_at).collect();
        assert_eq!(times, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let store = store(VecCollection::default());
        let m = msg("alice", "same", 100);
        store.append(&key(), &m).await.unwrap();
        store.append(&key(), &m).await.unwrap();

        let all = store.range_read(&key(), 0, 10, false).await.unwrap();
        assert_eq!(all, vec![m.clone(), m]);
    }

    #[tokio::test]
    async fn test_empty_room_and_out_of_range_start() {
        let store = store(VecCollection::default());
        assert!(store.range_read(&key(), 0, 5, false).await.unwrap().is_empty());

        store.append(&key(), &msg("alice", "only", 1)).await.unwrap();
        assert!(store.range_read(&key(), 1, 5, false).await.unwrap().is_empty());
        assert!(store.range_read(&key(), 3, 2, false).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_is_store_unavailable() {
        let store = store(VecCollection::failing());
        let err = store.append(&key(), &msg("alice", "x", 1)).await.unwrap_err();
        assert!(matches!(err, ChatError::StoreUnavailable(_)));

        let err = store.range_read(&key(), 0, 1, false).await.unwrap_err();
        assert!(matches!(err, ChatError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_store_unavailable() {
        let store = MessageStore::new(
            VecCollection::slow(Duration::from_millis(500)),
            Duration::from_millis(20),
        );
        let err = store.range_read(&key(), 0, 1, false).await.unwrap_err();
        match err {
            ChatError::StoreUnavailable(reason) => assert!(reason.contains("timed out")),
            other => panic!("expected StoreUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_corrupt_member_is_serialization_fault() {
        let collection = VecCollection::default();
        collection
            .insert(&key(), 1, "not json".to_string())
            .await
            .unwrap();
        let store = store(collection);

        let err = store.range_read(&key(), 0, 1, false).await.unwrap_err();
        assert!(matches!(err, ChatError::SerializationFault(_)));
    }
}
