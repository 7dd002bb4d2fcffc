//! In-memory session store - the default backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use vaahan_core::ports::{SessionStore, StoreError};

/// Session-scoped store using a simple HashMap with async RwLock.
///
/// Entries live for the process lifetime and are gone on exit, which is
/// exactly the session scope the services expect: state survives service
/// re-initialization within a run but never a restart.
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        tracing::trace!(key, "Session value written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        tracing::trace!(key, "Session value removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemorySessionStore::new();
        store.set("key1", "value1").await.unwrap();
        assert_eq!(store.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = InMemorySessionStore::new();
        store.set("key1", "value1").await.unwrap();
        store.set("key1", "value2").await.unwrap();
        assert_eq!(store.get("key1").await, Some("value2".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemorySessionStore::new();
        store.set("key1", "value1").await.unwrap();
        store.remove("key1").await.unwrap();
        assert_eq!(store.get("key1").await, None);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_ok() {
        let store = InMemorySessionStore::new();
        store.remove("missing").await.unwrap();
    }
}
