//! Digest sender interface.

use crate::error::DigestError;
use async_trait::async_trait;
use tidemark_types::Item;

/// Trait for dispatching one digest notification.
///
/// `items` arrive in newest-first storage order; implementations render
/// them oldest-first (see `tidemark_core::digest::render`) so the
/// notification reads chronologically. Delivery is single-shot: the
/// engine does not retry, a failure aborts the run, and re-invocation
/// re-attempts against the same data (at-least-once).
#[async_trait]
pub trait DigestSender: Send + Sync {
    /// Format and dispatch a single notification for `items`.
    async fn send(&self, items: &[Item]) -> Result<(), DigestError>;
}
