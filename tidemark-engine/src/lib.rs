//! # tidemark-engine
//!
//! The daily synchronization engine: on each trigger it decides which feed
//! items are new, detects the day-boundary rollover, derives the watermark
//! from the stored partition, and sequences digest delivery against
//! persistence.
//!
//! # Architecture
//!
//! The engine owns only orchestration. Everything it talks to is a trait:
//!
//! ```text
//! trigger → SyncEngine → ArchiveStore (date-keyed partition blobs)
//!                      → FeedSource   (items newer than a watermark)
//!                      → DigestSender (one notification per batch)
//! ```
//!
//! The pure rules (keying, merge, rendering) live in `tidemark-core`;
//! mock collaborators for tests live in [`mock`].
//!
//! # Example
//!
//! ```ignore
//! use tidemark_engine::{mock::*, SyncEngine};
//!
//! let engine = SyncEngine::new(MockArchiveStore::new(), MockFeedSource::new(), MockDigestSender::new());
//! let report = engine.run_once().await?;
//! println!("fetched {} new items", report.fetched);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod engine;
mod error;
mod feed;
pub mod mock;
mod sender;
mod store;

pub use engine::{RunReport, SyncEngine};
pub use error::{DigestError, EngineError, EngineResult, FeedError, StoreError};
pub use feed::FeedSource;
pub use sender::DigestSender;
pub use store::{ArchiveStore, Lookup};
