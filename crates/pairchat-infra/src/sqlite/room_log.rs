//! SQLite room log implementation.
//!
//! Implements `OrderedCollection` from `pairchat-core` over the
//! `room_entries` table. Position `n` in a room's order is row `n` of
//! `ORDER BY score, member, id`; reverse reads flip all three columns so the
//! descending order is the exact mirror of the ascending one.

use pairchat_core::store::OrderedCollection;
use pairchat_types::chat::RoomKey;
use pairchat_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `OrderedCollection`.
#[derive(Clone)]
pub struct SqliteRoomLog {
    pool: DatabasePool,
}

impl SqliteRoomLog {
    /// Create a new room log backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

const RANGE_ASC: &str = "SELECT member FROM room_entries WHERE room_key = ? \
     ORDER BY score ASC, member ASC, id ASC LIMIT ? OFFSET ?";

const RANGE_DESC: &str = "SELECT member FROM room_entries WHERE room_key = ? \
     ORDER BY score DESC, member DESC, id DESC LIMIT ? OFFSET ?";

fn query_err(e: sqlx::Error) -> RepositoryError {
    if matches!(
        e,
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
    ) {
        RepositoryError::Connection(e.to_string())
    } else {
        RepositoryError::Query(e.to_string())
    }
}

impl OrderedCollection for SqliteRoomLog {
    async fn insert(&self, key: &RoomKey, score: i64, member: String) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO room_entries (room_key, score, member) VALUES (?, ?, ?)")
            .bind(key.as_str())
            .bind(score)
            .bind(&member)
            .execute(&self.pool.writer)
            .await
            .map_err(query_err)?;

        Ok(())
    }

    async fn range(
        &self,
        key: &RoomKey,
        start: u64,
        end: u64,
        reverse: bool,
    ) -> Result<Vec<String>, RepositoryError> {
        // SQLite integers are signed 64-bit.
        let offset = i64::try_from(start).unwrap_or(i64::MAX);
        let count = i64::try_from(end - start).unwrap_or(i64::MAX).saturating_add(1);

        let sql = if reverse { RANGE_DESC } else { RANGE_ASC };
        let rows = sqlx::query(sql)
            .bind(key.as_str())
            .bind(count)
            .bind(offset)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_err)?;

        let mut members = Vec::with_capacity(rows.len());
        for row in &rows {
            let member: String = row.try_get("member").map_err(query_err)?;
            members.push(member);
        }

        Ok(members)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool.reader)
            .await
            .map_err(query_err)?;
        Ok(())
    }
}
