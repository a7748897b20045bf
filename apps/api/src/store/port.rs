use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize resume record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value persistence seam for the resume record.
///
/// Implementations store opaque strings; the store owns (de)serialization.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Backend name for startup logs.
    fn name(&self) -> &'static str;
}
