//! Host key-value storage.

mod file;
mod memory;

use async_trait::async_trait;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::StoreError;

/// Asynchronous key-value storage provided by the host.
///
/// Values are arbitrary JSON; no schema is enforced at this layer.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing is stored.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;
}
