//! In-memory room log implementation.
//!
//! Each room is a sorted vector of `(score, member)` pairs in a `DashMap`.
//! Inserts take the room's shard lock for the duration of one binary search
//! and one vector insert, so concurrent appends are serialized per room.
//! Nothing survives a restart; intended for development and tests.

use dashmap::DashMap;
use pairchat_core::store::OrderedCollection;
use pairchat_types::chat::RoomKey;
use pairchat_types::error::RepositoryError;

#[derive(Default)]
pub struct InMemoryRoomLog {
    rooms: DashMap<RoomKey, Vec<(i64, String)>>,
}

impl InMemoryRoomLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries stored for `key`.
    pub fn len(&self, key: &RoomKey) -> usize {
        self.rooms.get(key).map(|entries| entries.len()).unwrap_or(0)
    }
}

impl OrderedCollection for InMemoryRoomLog {
    async fn insert(&self, key: &RoomKey, score: i64, member: String) -> Result<(), RepositoryError> {
        let mut entries = self.rooms.entry(key.clone()).or_default();
        // Upper bound: an identical entry lands after its twin.
        let pos = entries
            .partition_point(|(s, m)| (*s, m.as_str()) <= (score, member.as_str()));
        entries.insert(pos, (score, member));
        Ok(())
    }

    async fn range(
        &self,
        key: &RoomKey,
        start: u64,
        end: u64,
        reverse: bool,
    ) -> Result<Vec<String>, RepositoryError> {
        let Some(entries) = self.rooms.get(key) else {
            return Ok(Vec::new());
        };

        let len = entries.len() as u64;
        if start >= len {
            return Ok(Vec::new());
        }
        let last = end.min(len - 1);
        let (lo, hi) = if reverse {
            (len - 1 - last, len - 1 - start)
        } else {
            (start, last)
        };

        let window = &entries[lo as usize..=hi as usize];
        let members = if reverse {
            window.iter().rev().map(|(_, m)| m.clone()).collect()
        } else {
            window.iter().map(|(_, m)| m.clone()).collect()
        };
        Ok(members)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
