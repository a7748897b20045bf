use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::port::{StoragePort, StoreError};

/// In-process storage; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStoragePort {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStoragePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Port pre-seeded with one raw value.
    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl StoragePort for MemoryStoragePort {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
