use std::sync::RwLock;

use async_trait::async_trait;

use super::{StoreError, TokenStore};

/// A token store that keeps the token in process memory only.
///
/// Nothing survives a restart, which makes this the backend of choice for
/// tests and for shared-machine setups where persisting a credential to
/// disk is undesirable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store pre-seeded with a token, as if a previous login had saved one.
    pub fn with_token(token: impl Into<String>) -> Self {
        MemoryStore {
            token: RwLock::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryStore {
    async fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.token.read().expect("token lock poisoned").clone())
    }

    async fn save(&self, token: &str) -> Result<(), StoreError> {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.token.write().expect("token lock poisoned") = None;
        Ok(())
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
