//! A single harvested feed item.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// One immutable feed entry.
///
/// An item carries everything a digest needs to render it: the author's
/// display handle, the body text, and (derivably) a permalink. Two items
/// with the same [`ItemId`] are the same item regardless of the other
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, monotonically increasing identifier.
    pub id: ItemId,
    /// Display handle of the author, without any leading sigil.
    pub author: String,
    /// Full body text.
    pub body: String,
}

impl Item {
    /// Create a new item.
    pub fn new(id: ItemId, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Derive the permalink for this item under the given base URL.
    ///
    /// The permalink is not stored; it is a pure function of the author
    /// handle and the id, so it round-trips for free with the rest of
    /// the item.
    pub fn permalink_under(&self, base_url: &str) -> String {
        format!(
            "{}/{}/status/{}",
            base_url.trim_end_matches('/'),
            self.author,
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permalink_is_derived_from_author_and_id() {
        let item = Item::new(ItemId::new(99), "alice", "hello");
        assert_eq!(
            item.permalink_under("https://example.org"),
            "https://example.org/alice/status/99"
        );
    }

    #[test]
    fn permalink_tolerates_trailing_slash_on_base() {
        let item = Item::new(ItemId::new(1), "bob", "hi");
        assert_eq!(
            item.permalink_under("https://example.org/"),
            "https://example.org/bob/status/1"
        );
    }

    #[test]
    fn item_round_trips_through_json() {
        let item = Item::new(ItemId::new(7), "carol", "body text");
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
