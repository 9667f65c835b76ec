//! Mock collaborators for testing.
//!
//! Each mock captures the calls made against it and supports queueing
//! responses and forcing the next call to fail, so engine tests can cover
//! every branch of the state machine without real I/O.

use crate::error::{DigestError, FeedError, StoreError};
use crate::feed::FeedSource;
use crate::sender::DigestSender;
use crate::store::{ArchiveStore, Lookup};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tidemark_core::PartitionKey;
use tidemark_types::{Item, ItemId, Partition};

/// In-memory archive store for tests.
///
/// Reads and writes a `HashMap`, records every `put`, and can fail the
/// next `get` or `put` on demand.
#[derive(Debug, Default)]
pub struct MockArchiveStore {
    inner: Arc<Mutex<StoreInner>>,
}

#[derive(Debug, Default)]
struct StoreInner {
    partitions: HashMap<String, Partition>,
    puts: Vec<(String, Partition)>,
    fail_next_get: Option<String>,
    fail_next_put: Option<String>,
}

impl MockArchiveStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a partition under a key, bypassing `put` recording.
    pub fn insert(&self, key: &PartitionKey, partition: Partition) {
        let mut inner = self.inner.lock().unwrap();
        inner.partitions.insert(key.as_str().to_string(), partition);
    }

    /// Read a stored partition directly (what a later run would see).
    pub fn stored(&self, key: &PartitionKey) -> Option<Partition> {
        let inner = self.inner.lock().unwrap();
        inner.partitions.get(key.as_str()).cloned()
    }

    /// All recorded `put` calls, in order.
    pub fn puts(&self) -> Vec<(String, Partition)> {
        let inner = self.inner.lock().unwrap();
        inner.puts.clone()
    }

    /// Number of `put` calls made so far.
    pub fn put_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.puts.len()
    }

    /// Cause the next `get` to fail with an I/O error.
    pub fn fail_next_get(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_get = Some(error.to_string());
    }

    /// Cause the next `put` to fail with an I/O error.
    pub fn fail_next_put(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next_put = Some(error.to_string());
    }
}

impl Clone for MockArchiveStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl ArchiveStore for MockArchiveStore {
    async fn get(&self, key: &PartitionKey) -> Result<Lookup, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_get.take() {
            return Err(StoreError::Io(std::io::Error::other(error)));
        }

        Ok(match inner.partitions.get(key.as_str()) {
            Some(partition) => Lookup::Found(partition.clone()),
            None => Lookup::Missing,
        })
    }

    async fn put(&self, key: &PartitionKey, partition: &Partition) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next_put.take() {
            return Err(StoreError::Io(std::io::Error::other(error)));
        }

        inner
            .partitions
            .insert(key.as_str().to_string(), partition.clone());
        inner
            .puts
            .push((key.as_str().to_string(), partition.clone()));
        Ok(())
    }
}

/// Scripted feed source for tests.
///
/// Pages are queued in order; each `fetch_since` pops one (an exhausted
/// queue yields an empty page) and records the watermark it was asked for.
#[derive(Debug, Default)]
pub struct MockFeedSource {
    inner: Arc<Mutex<FeedInner>>,
}

#[derive(Debug, Default)]
struct FeedInner {
    pages: VecDeque<Vec<Item>>,
    calls: Vec<ItemId>,
    fail_next: Option<String>,
}

impl MockFeedSource {
    /// Create a feed that returns empty pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a page to be returned by the next `fetch_since` call.
    pub fn queue_page(&self, items: Vec<Item>) {
        let mut inner = self.inner.lock().unwrap();
        inner.pages.push_back(items);
    }

    /// The watermarks passed to `fetch_since`, in call order.
    pub fn calls(&self) -> Vec<ItemId> {
        let inner = self.inner.lock().unwrap();
        inner.calls.clone()
    }

    /// Cause the next `fetch_since` to fail with a transport error.
    pub fn fail_next(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next = Some(error.to_string());
    }
}

impl Clone for MockFeedSource {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl FeedSource for MockFeedSource {
    async fn fetch_since(&self, watermark: ItemId) -> Result<Vec<Item>, FeedError> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(watermark);

        if let Some(error) = inner.fail_next.take() {
            return Err(FeedError::Transport(error));
        }

        Ok(inner.pages.pop_front().unwrap_or_default())
    }
}

/// Capturing digest sender for tests.
#[derive(Debug, Default)]
pub struct MockDigestSender {
    inner: Arc<Mutex<SenderInner>>,
}

#[derive(Debug, Default)]
struct SenderInner {
    sent: Vec<Vec<Item>>,
    fail_next: Option<String>,
}

impl MockDigestSender {
    /// Create a sender that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every batch passed to `send`, in call order.
    pub fn sent(&self) -> Vec<Vec<Item>> {
        let inner = self.inner.lock().unwrap();
        inner.sent.clone()
    }

    /// Number of `send` calls made so far.
    pub fn send_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.sent.len()
    }

    /// Cause the next `send` to fail.
    pub fn fail_next(&self, error: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail_next = Some(error.to_string());
    }
}

impl Clone for MockDigestSender {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl DigestSender for MockDigestSender {
    async fn send(&self, items: &[Item]) -> Result<(), DigestError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(error) = inner.fail_next.take() {
            return Err(DigestError::Dispatch(error));
        }

        inner.sent.push(items.to_vec());
        Ok(())
    }
}
