//! Feed source interface.

use crate::error::FeedError;
use async_trait::async_trait;
use tidemark_types::{Item, ItemId};

/// Trait for the upstream feed.
///
/// Implementations own their transport, authentication, and timeout
/// policy; the engine only supplies the watermark.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch items strictly newer than `watermark`, newest-first.
    ///
    /// One page per call, capped at a source-defined size; the invocation
    /// cadence is assumed frequent enough that a single page covers the
    /// gap (pagination is out of scope).
    async fn fetch_since(&self, watermark: ItemId) -> Result<Vec<Item>, FeedError>;
}
