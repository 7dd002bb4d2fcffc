use async_trait::async_trait;

/// Session store trait - abstraction over session-scoped key-value backends.
///
/// Values live for the duration of the session and are serialized strings;
/// the services own the encoding. Callers must treat unparseable values as
/// absent and fall back to defaults rather than failing.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Get the raw value stored under a key.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value, overwriting unconditionally.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Session store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage quota exceeded")]
    QuotaExceeded,

    #[error("Operation failed: {0}")]
    Operation(String),
}
