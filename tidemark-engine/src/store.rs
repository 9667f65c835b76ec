//! Archive store interface.
//!
//! One serialized partition blob per calendar-date key. The store never
//! appends; the engine owns merge semantics and replaces blobs wholesale.

use crate::error::StoreError;
use async_trait::async_trait;
use tidemark_core::PartitionKey;
use tidemark_types::Partition;

/// Outcome of a partition lookup.
///
/// A closed variant set so callers switch on it instead of inspecting a
/// provider's error internals to spot "no such key". An empty partition
/// arrives as `Found` — "no items today" and "no partition yet" are
/// different answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The key exists; here is its partition (possibly empty).
    Found(Partition),
    /// The key does not exist.
    Missing,
}

/// Trait for date-keyed partition storage backends.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Read the partition stored under `key`.
    ///
    /// A missing key is a normal outcome ([`Lookup::Missing`]), not an
    /// error; any [`StoreError`] aborts the calling run.
    async fn get(&self, key: &PartitionKey) -> Result<Lookup, StoreError>;

    /// Replace the partition stored under `key` in a single write.
    async fn put(&self, key: &PartitionKey, partition: &Partition) -> Result<(), StoreError>;
}
