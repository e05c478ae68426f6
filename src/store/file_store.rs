use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{StoreError, TokenStore};
use crate::config::FileStoreConfig;

/// On-disk document layout. Versioned so the format can evolve without
/// silently misreading older files.
#[derive(Serialize, Deserialize, Debug)]
struct TokenDocument {
    version: i32,
    token: String,
}

/// A token store backed by a small JSON document on disk.
///
/// This is the persistent storage of the session core: the token written
/// here at login is what bootstrap finds after the next restart.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(config: &FileStoreConfig) -> Self {
        FileStore {
            path: config.path.clone(),
        }
    }
}

#[async_trait]
impl TokenStore for FileStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no token document on disk");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let document: TokenDocument = serde_json::from_str(&raw)?;
        Ok(Some(document.token))
    }

    async fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let document = TokenDocument {
            version: 1,
            token: token.to_string(),
        };
        let raw = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, raw).await?;
        debug!(path = %self.path.display(), "token document written");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(name: &str) -> FileStore {
        let path = std::env::temp_dir().join(format!(
            "careergate-file-store-{}-{}.json",
            std::process::id(),
            name
        ));
        FileStore::new(&FileStoreConfig { path })
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let store = test_store("round-trip");
        store.clear().await.unwrap();

        assert_eq!(store.load().await.unwrap(), None);

        store.save("persisted-token").await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            Some("persisted-token".to_string())
        );

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    /// Clearing an already-absent document is not an error.
    #[tokio::test]
    async fn test_file_store_clear_is_idempotent() {
        let store = test_store("clear-idempotent");
        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    /// A corrupt document surfaces as a document error, not a panic.
    #[tokio::test]
    async fn test_file_store_corrupt_document() {
        let store = test_store("corrupt");
        tokio::fs::write(&store.path, "not json").await.unwrap();

        let result = store.load().await;
        assert!(matches!(result, Err(StoreError::Document(_))));

        store.clear().await.unwrap();
    }
}
