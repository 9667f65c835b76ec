//! Local collaborator implementations.
//!
//! These let the engine run end to end on a laptop: partitions live as
//! JSON files under a directory, the feed is a JSON-lines file, and
//! digests land in a file or on stdout. Cloud-backed implementations of
//! the same traits slot in without touching the engine.

mod file_sender;
mod fs_store;
mod jsonl_feed;

pub use file_sender::FileDigestSender;
pub use fs_store::FsArchiveStore;
pub use jsonl_feed::JsonlFeedSource;
