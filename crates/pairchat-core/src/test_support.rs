//! In-process `OrderedCollection` used by the core's unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use pairchat_types::chat::RoomKey;
use pairchat_types::error::RepositoryError;

use crate::store::OrderedCollection;

/// Sorted vectors keyed by room, with optional injected failure or latency.
#[derive(Default)]
pub(crate) struct VecCollection {
    rooms: Mutex<HashMap<String, Vec<(i64, String)>>>,
    failing: bool,
    delay: Option<Duration>,
}

impl VecCollection {
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub(crate) fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    async fn gate(&self) -> Result<(), RepositoryError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing {
            return Err(RepositoryError::Connection("connection refused".to_string()));
        }
        Ok(())
    }
}

impl OrderedCollection for VecCollection {
    async fn insert(&self, key: &RoomKey, score: i64, member: String) -> Result<(), RepositoryError> {
        self.gate().await?;
        let mut rooms = self.rooms.lock().unwrap();
        let entries = rooms.entry(key.as_str().to_string()).or_default();
        let pos = entries.partition_point(|(s, m)| (*s, m.as_str()) <= (score, member.as_str()));
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
        self.gate().await?;
        let rooms = self.rooms.lock().unwrap();
        let Some(entries) = rooms.get(key.as_str()) else {
            return Ok(Vec::new());
        };
        let take = (end - start + 1) as usize;
        let members: Vec<String> = if reverse {
            entries
                .iter()
                .rev()
                .skip(start as usize)
                .take(take)
                .map(|(_, m)| m.clone())
                .collect()
        } else {
            entries
                .iter()
                .skip(start as usize)
                .take(take)
                .map(|(_, m)| m.clone())
                .collect()
        };
        Ok(members)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.gate().await
    }
}
