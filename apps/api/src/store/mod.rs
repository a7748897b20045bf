// Resume persistence: one record, serialized whole under a fixed key.

pub mod file;
pub mod handlers;
pub mod memory;
pub mod port;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::models::{ResumeRecord, SectionUpdate};
pub use file::FileStoragePort;
pub use memory::MemoryStoragePort;
pub use port::{StoragePort, StoreError};

/// Key the record is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "funda-resume-data";

/// Holds the current `ResumeRecord` and keeps it in sync with a `StoragePort`.
///
/// Mutations are whole-section or whole-record replacements. Each one is
/// persisted before the in-memory copy is swapped, so readers only ever see
/// complete snapshots and a failed write leaves the previous record in place.
pub struct ResumeStore {
    port: Arc<dyn StoragePort>,
    key: String,
    record: RwLock<ResumeRecord>,
}

impl ResumeStore {
    /// Loads the stored record. Absent, unreadable, or unparsable data yields
    /// the default record; loading never fails.
    pub async fn load(port: Arc<dyn StoragePort>, key: &str) -> Self {
        let record = match port.read(key).await {
            Ok(None) => {
                info!("No stored resume under '{key}', starting empty");
                ResumeRecord::default()
            }
            Ok(Some(raw)) => match serde_json::from_str::<ResumeRecord>(&raw) {
                Ok(mut record) => {
                    record.assign_missing_ids();
                    record
                }
                Err(e) => {
                    warn!("Discarding unparsable resume stored under '{key}': {e}");
                    ResumeRecord::default()
                }
            },
            Err(e) => {
                warn!("Discarding unreadable resume stored under '{key}': {e}");
                ResumeRecord::default()
            }
        };

        Self {
            port,
            key: key.to_string(),
            record: RwLock::new(record),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &'static str {
        self.port.name()
    }

    pub async fn snapshot(&self) -> ResumeRecord {
        self.record.read().await.clone()
    }

    pub async fn replace(&self, mut record: ResumeRecord) -> Result<ResumeRecord, StoreError> {
        record.assign_missing_ids();
        self.commit(|current| *current = record).await
    }

    pub async fn apply(&self, update: SectionUpdate) -> Result<ResumeRecord, StoreError> {
        self.commit(|current| current.apply(update)).await
    }

    pub async fn reset(&self) -> Result<ResumeRecord, StoreError> {
        self.commit(|current| *current = ResumeRecord::default()).await
    }

    async fn commit<F>(&self, mutate: F) -> Result<ResumeRecord, StoreError>
    where
        F: FnOnce(&mut ResumeRecord),
    {
        let mut guard = self.record.write().await;
        let mut next = guard.clone();
        mutate(&mut next);

        let serialized = serde_json::to_string(&next)?;
        self.port.write(&self.key, &serialized).await?;

        *guard = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;
    use async_trait::async_trait;

    struct FailingPort;

    #[async_trait]
    impl StoragePort for FailingPort {
        async fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        async fn write(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct UnreadablePort;

    #[async_trait]
    impl StoragePort for UnreadablePort {
        async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }

        async fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "unreadable"
        }
    }

    #[tokio::test]
    async fn test_absent_state_loads_default() {
        let store =
            ResumeStore::load(Arc::new(MemoryStoragePort::new()), DEFAULT_STORAGE_KEY).await;
        assert_eq!(store.snapshot().await, ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_corrupt_state_loads_default() {
        let port = MemoryStoragePort::with_entry(DEFAULT_STORAGE_KEY, "{not json");
        let store = ResumeStore::load(Arc::new(port), DEFAULT_STORAGE_KEY).await;
        assert_eq!(store.snapshot().await, ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_non_utf8_file_loads_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json")),
            [0xff, 0xfe, b'{', 0x80],
        )
        .unwrap();

        let port: Arc<dyn StoragePort> = Arc::new(FileStoragePort::new(dir.path()));
        let store = ResumeStore::load(port, DEFAULT_STORAGE_KEY).await;
        assert_eq!(store.snapshot().await, ResumeRecord::default());

        // The store stays writable and replaces the unreadable file.
        store
            .apply(SectionUpdate::Profession("nurse".to_string()))
            .await
            .unwrap();
        let raw = std::fs::read_to_string(dir.path().join(format!("{DEFAULT_STORAGE_KEY}.json")));
        assert!(raw.unwrap().contains("\"nurse\""));
    }

    #[tokio::test]
    async fn test_failed_read_loads_default() {
        let store = ResumeStore::load(Arc::new(UnreadablePort), DEFAULT_STORAGE_KEY).await;
        assert_eq!(store.snapshot().await, ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_partial_state_fills_defaults() {
        let port = MemoryStoragePort::with_entry(
            DEFAULT_STORAGE_KEY,
            r#"{"profession":"nurse","experience":[{"company":"General"}]}"#,
        );
        let store = ResumeStore::load(Arc::new(port), DEFAULT_STORAGE_KEY).await;
        let record = store.snapshot().await;
        assert_eq!(record.profession, "nurse");
        assert_eq!(record.selected_template, "professional-classic");
        assert!(!record.experience[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_mutation_persists_and_reloads() {
        let port: Arc<dyn StoragePort> = Arc::new(MemoryStoragePort::new());
        let store = ResumeStore::load(port.clone(), DEFAULT_STORAGE_KEY).await;

        store
            .apply(SectionUpdate::Experience(vec![ExperienceEntry {
                company: "Acme".to_string(),
                ..Default::default()
            }]))
            .await
            .unwrap();
        store
            .apply(SectionUpdate::Profession("software-engineer".to_string()))
            .await
            .unwrap();

        let reloaded = ResumeStore::load(port, DEFAULT_STORAGE_KEY).await;
        assert_eq!(reloaded.snapshot().await, store.snapshot().await);
        assert_eq!(reloaded.snapshot().await.experience[0].company, "Acme");
    }

    #[tokio::test]
    async fn test_reset_clears_record() {
        let port: Arc<dyn StoragePort> = Arc::new(MemoryStoragePort::new());
        let store = ResumeStore::load(port.clone(), DEFAULT_STORAGE_KEY).await;
        store
            .apply(SectionUpdate::Profession("nurse".to_string()))
            .await
            .unwrap();

        let cleared = store.reset().await.unwrap();
        assert_eq!(cleared, ResumeRecord::default());

        let reloaded = ResumeStore::load(port, DEFAULT_STORAGE_KEY).await;
        assert!(reloaded.snapshot().await.profession.is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_record() {
        let store = ResumeStore::load(Arc::new(FailingPort), DEFAULT_STORAGE_KEY).await;
        let result = store
            .apply(SectionUpdate::Profession("nurse".to_string()))
            .await;
        assert!(result.is_err());
        assert!(store.snapshot().await.profession.is_empty());
    }

    #[tokio::test]
    async fn test_file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let port: Arc<dyn StoragePort> = Arc::new(FileStoragePort::new(dir.path()));
        let store = ResumeStore::load(port.clone(), DEFAULT_STORAGE_KEY).await;

        let mut record = ResumeRecord::default();
        record.personal_info.full_name = "Grace Hopper".to_string();
        store.replace(record).await.unwrap();

        let reloaded = ResumeStore::load(port, DEFAULT_STORAGE_KEY).await;
        assert_eq!(
            reloaded.snapshot().await.personal_info.full_name,
            "Grace Hopper"
        );
    }
}
