//! Error types for the sync engine and its collaborators.
//!
//! "Partition not found" is deliberately absent here: it is an expected
//! outcome that drives the rollover branch, and the store interface
//! reports it as [`crate::Lookup::Missing`] rather than as an error.

/// Archive store errors.
///
/// Anything beyond `Missing` aborts the run; the engine performs no
/// translation or retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connectivity or I/O failure talking to the store.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored blob exists but fails to deserialize. Fatal, no auto-repair.
    #[error("stored partition is malformed: {0}")]
    Malformed(String),
}

/// Feed source errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Connectivity failure talking to the feed.
    #[error("feed transport error: {0}")]
    Transport(String),

    /// The feed responded with data that could not be parsed.
    #[error("feed returned malformed data: {0}")]
    Malformed(String),
}

/// Digest sender errors.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// The notification could not be dispatched.
    #[error("digest dispatch failed: {0}")]
    Dispatch(String),
}

/// Top-level error for one engine run.
///
/// The invoking scheduler owns retry policy; the engine only reports.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Feed error.
    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    /// Digest error.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),
}

/// Result type alias for engine runs.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
