//! Identifier and ordering types for tidemark.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a feed item.
///
/// Identifiers are assigned by the feed's origin and are monotonically
/// increasing with creation time for a given source, which is what makes
/// them usable as a watermark: "everything strictly greater than id N is
/// new". Identity of an item is its id alone.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// The "no prior items" sentinel used as the initial watermark.
    pub const ZERO: ItemId = ItemId(0);

    /// Create an ItemId from its raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value of this ItemId.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
