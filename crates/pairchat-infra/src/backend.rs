//! Backend selection for room logs.
//!
//! `RoomLogBackend` lets the binary pick SQLite or in-memory storage from
//! configuration while the services stay generic over a single concrete
//! `OrderedCollection` type.

use std::path::Path;

use pairchat_core::store::OrderedCollection;
use pairchat_types::chat::RoomKey;
use pairchat_types::config::{StoreBackend, StoreConfig};
use pairchat_types::error::RepositoryError;
use tracing::info;

use crate::memory::InMemoryRoomLog;
use crate::sqlite::pool::{DatabasePool, database_url_in};
use crate::sqlite::room_log::SqliteRoomLog;

pub enum RoomLogBackend {
    Sqlite(SqliteRoomLog),
    Memory(InMemoryRoomLog),
}

impl RoomLogBackend {
    /// Open the backend named by `config`.
    ///
    /// SQLite uses `config.database_url`, or `pairchat.db` under `data_dir`
    /// when none is set; migrations run before this returns.
    pub async fn open(config: &StoreConfig, data_dir: &Path) -> Result<Self, sqlx::Error> {
        match config.backend {
            StoreBackend::Memory => {
                info!("Using in-memory room logs");
                Ok(Self::Memory(InMemoryRoomLog::new()))
            }
            StoreBackend::Sqlite => {
                let url = config
                    .database_url
                    .clone()
                    .unwrap_or_else(|| database_url_in(data_dir));
                info!(url = %url, "Opening SQLite room logs");
                let pool = DatabasePool::new(&url).await?;
                Ok(Self::Sqlite(SqliteRoomLog::new(pool)))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Memory(_) => "memory",
        }
    }
}

impl OrderedCollection for RoomLogBackend {
    async fn insert(&self, key: &RoomKey, score: i64, member: String) -> Result<(), RepositoryError> {
        match self {
            Self::Sqlite(log) => log.insert(key, score, member).await,
            Self::Memory(log) => log.insert(key, score, member).await,
        }
    }

    async fn range(
        &self,
        key: &RoomKey,
        start: u64,
        end: u64,
        reverse: bool,
    ) -> Result<Vec<String>, RepositoryError> {
        match self {
            Self::Sqlite(log) => log.range(key, start, end, reverse).await,
            Self::Memory(log) => log.range(key, start, end, reverse).await,
        }
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        match self {
            Self::Sqlite(log) => log.ping().await,
            Self::Memory(log) => log.ping().await,
        }
    }
}
