//! Application state wiring the chat service to its backend.
//!
//! The service is generic over the ordered collection; AppState pins it to
//! `RoomLogBackend` so the same binary can run on SQLite or in memory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use pairchat_core::service::ChatService;
use pairchat_core::store::MessageStore;
use pairchat_infra::backend::RoomLogBackend;
use pairchat_infra::config::{config_path_in, load_global_config, resolve_data_dir};
use pairchat_types::config::{GlobalConfig, StoreBackend};

/// Concrete chat service pinned to the infra backend selector.
pub type ConcreteChatService = ChatService<RoomLogBackend>;

/// Shared application state, used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load configuration, open the configured backend, wire the service.
    pub async fn init(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config_path_in(&data_dir));
        let config = load_global_config(&config_path).await;

        // The default SQLite file lives in the data directory.
        if config.store.backend == StoreBackend::Sqlite && config.store.database_url.is_none() {
            tokio::fs::create_dir_all(&data_dir).await?;
        }

        let backend = RoomLogBackend::open(&config.store, &data_dir).await?;
        Ok(Self::from_backend(backend, config, data_dir))
    }

    /// Wire state around an already-open backend.
    pub fn from_backend(backend: RoomLogBackend, config: GlobalConfig, data_dir: PathBuf) -> Self {
        let timeout = Duration::from_millis(config.store.timeout_ms);
        let chat_service = ChatService::new(MessageStore::new(backend, timeout));

        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
            data_dir,
        }
    }

    /// Name of the active backend ("sqlite" or "memory").
    pub fn backend_name(&self) -> &'static str {
        self.chat_service.store().collection().name()
    }
}
