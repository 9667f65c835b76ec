//! # tidemark-core
//!
//! Pure logic for tidemark (no I/O, instant tests).
//!
//! This crate implements the calendar keying, merge, and digest-rendering
//! rules of the daily sync without touching network or disk, so every rule
//! is testable as a plain function. The actual I/O is performed by
//! `tidemark-engine`, which drives these functions against its store, feed,
//! and sender collaborators.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod digest;
pub mod keying;
pub mod merge;

pub use digest::Digest;
pub use keying::{DayWindow, PartitionKey};
pub use merge::merge_newest_first;
