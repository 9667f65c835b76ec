//! Filesystem-backed archive store.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tidemark_core::PartitionKey;
use tidemark_engine::{ArchiveStore, Lookup, StoreError};
use tidemark_types::Partition;
use tracing::debug;

/// Stores one JSON blob per partition key under a root directory.
///
/// The key's own layout (`items/YYYY-MM-DD/items.json`) becomes the path
/// below the root, so the on-disk tree mirrors the logical keyspace.
#[derive(Debug, Clone)]
pub struct FsArchiveStore {
    root: PathBuf,
}

impl FsArchiveStore {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on first put.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &PartitionKey) -> PathBuf {
        self.root.join(key.as_str())
    }
}

#[async_trait]
impl ArchiveStore for FsArchiveStore {
    async fn get(&self, key: &PartitionKey) -> Result<Lookup, StoreError> {
        let path = self.path_for(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key = %key, "partition not present on disk");
                return Ok(Lookup::Missing);
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        let partition = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Malformed(format!("{}: {e}", path.display())))?;
        Ok(Lookup::Found(partition))
    }

    async fn put(&self, key: &PartitionKey, partition: &Partition) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec(partition)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        debug!(key = %key, items = partition.len(), "writing partition");
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tidemark_types::{Item, ItemId};

    fn key() -> PartitionKey {
        PartitionKey::for_date(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap())
    }

    #[tokio::test]
    async fn absent_key_is_missing_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArchiveStore::new(dir.path());

        assert_eq!(store.get(&key()).await.unwrap(), Lookup::Missing);
    }

    #[tokio::test]
    async fn partition_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArchiveStore::new(dir.path());
        let partition =
            Partition::from_newest_first(vec![Item::new(ItemId::new(2), "a", "x")]);

        store.put(&key(), &partition).await.unwrap();

        assert_eq!(store.get(&key()).await.unwrap(), Lookup::Found(partition));
    }

    #[tokio::test]
    async fn empty_partition_is_found_not_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArchiveStore::new(dir.path());

        store.put(&key(), &Partition::empty()).await.unwrap();

        assert_eq!(
            store.get(&key()).await.unwrap(),
            Lookup::Found(Partition::empty())
        );
    }

    #[tokio::test]
    async fn put_replaces_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArchiveStore::new(dir.path());
        let first = Partition::from_newest_first(vec![Item::new(ItemId::new(1), "a", "x")]);
        let second = Partition::from_newest_first(vec![Item::new(ItemId::new(2), "b", "y")]);

        store.put(&key(), &first).await.unwrap();
        store.put(&key(), &second).await.unwrap();

        assert_eq!(store.get(&key()).await.unwrap(), Lookup::Found(second));
    }

    #[tokio::test]
    async fn garbage_blob_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsArchiveStore::new(dir.path());
        let path = dir.path().join(key().as_str());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"not json at all").unwrap();

        let result = store.get(&key()).await;
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }
}
