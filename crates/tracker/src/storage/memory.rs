//! In-memory key-value store.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use tokio::sync::RwLock;

use crate::models::types::Result;
use crate::storage::KeyValueStore;

/// Process-local store; the default for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>>> + Send + 'a>> {
        Box::pin(async move { Ok(self.entries.read().await.get(key).cloned()) })
    }

    fn save<'a>(
        &'a self,
        key: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move {
            self.entries
                .write()
                .await
                .insert(key.to_string(), data.to_vec());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = MemoryStore::new();
        store.save("savedUser", b"payload").await.unwrap();

        assert_eq!(
            store.load("savedUser").await.unwrap(),
            Some(b"payload".to_vec())
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("completedRoutes").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = MemoryStore::new();
        store.save("k", b"old").await.unwrap();
        store.save("k", b"new").await.unwrap();

        assert_eq!(store.load("k").await.unwrap(), Some(b"new".to_vec()));
    }
}
