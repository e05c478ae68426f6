use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use super::{file_store::FileStore, memory_store::MemoryStore};
use crate::config::StoreConfig;

/// Errors raised by token store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("token store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("token store document error: {0}")]
    Document(#[from] serde_json::Error),
}

/// The TokenStore trait abstracts where the bearer token lives between
/// application runs (load, save, clear).
///
/// The token is the only durable piece of session state: it is read by
/// bootstrap, written by login and deleted by logout. `user`, `loading`
/// and `error` never touch the store.
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> Result<Option<String>, StoreError>;
    async fn save(&self, token: &str) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;

    /// Whether tokens survive a process restart. The memory backend returns
    /// false so startup can log what kind of session continuity to expect.
    fn is_persistent(&self) -> bool {
        true
    }
}

/// Creates a concrete store implementation based on the StoreConfig.
pub fn create_store(config: &StoreConfig) -> Arc<dyn TokenStore> {
    match config {
        StoreConfig::File(file_config) => {
            info!(path = %file_config.path.display(), "using file token store");
            Arc::new(FileStore::new(file_config))
        }
        StoreConfig::Memory => {
            info!("using in-memory token store; sessions will not survive restarts");
            Arc::new(MemoryStore::new())
        }
    }
}
