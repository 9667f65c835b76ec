//! # tidemark-types
//!
//! Domain types for tidemark: feed items, date partitions, and the
//! identifier ordering the sync engine's watermark logic is built on.
//!
//! The persisted representation is deliberately plain: a partition is a
//! JSON array of items, so the blob a store holds for a given day is
//! readable with nothing but a JSON tool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ids;
pub mod item;
pub mod partition;

pub use ids::ItemId;
pub use item::Item;
pub use partition::Partition;
