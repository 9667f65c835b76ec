//! Date-partitioned item collections.

use crate::ids::ItemId;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// The items archived for one calendar date, newest-first by arrival.
///
/// # Ordering invariant
///
/// A partition is ordered newest-first **by arrival**: the head is the
/// most recently fetched item. Feed sources return pages newest-first and
/// merges prepend, so the invariant is preserved structurally rather than
/// by sorting. Arrival order is authoritative; it normally coincides with
/// descending id but is not re-derived from ids.
///
/// An empty partition is a legitimate value (an explicit "no items today"
/// marker), distinct from the partition being absent from the store
/// altogether. That distinction belongs to the store interface, not to
/// this type.
///
/// Serialized form is a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    items: Vec<Item>,
}

impl Partition {
    /// Create a partition from items already ordered newest-first.
    pub fn from_newest_first(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Create an empty partition.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of items in the partition.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the partition holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate newest-first (storage order).
    pub fn newest_first(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Iterate oldest-first (chronological reading order, used by digests).
    pub fn oldest_first(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().rev()
    }

    /// The watermark: maximum id over the partition, [`ItemId::ZERO`] when
    /// empty.
    ///
    /// The watermark is never persisted on its own; it is always re-derived
    /// here, so the stored partition stays the single source of truth.
    pub fn watermark(&self) -> ItemId {
        self.items
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap_or(ItemId::ZERO)
    }

    /// The item holding the maximum id, if any.
    ///
    /// When several items share the maximum id (globally unique ids make
    /// that impossible in practice, but it is handled anyway) the one
    /// encountered first wins; exactly one item is returned.
    pub fn max_item(&self) -> Option<&Item> {
        let mut best: Option<&Item> = None;
        for item in &self.items {
            match best {
                Some(b) if item.id <= b.id => {}
                _ => best = Some(item),
            }
        }
        best
    }

    /// Consume the partition, yielding the newest-first item vector.
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

impl FromIterator<Item> for Partition {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
