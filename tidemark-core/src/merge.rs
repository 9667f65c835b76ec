//! Merging freshly fetched items into the day's partition.

use std::collections::HashSet;
use tidemark_types::{Item, ItemId, Partition};

/// Merge newly fetched items into the current partition.
///
/// `fetched` is prepended to `current`, both already newest-first, so the
/// result stays newest-first without any sorting. Relative order within
/// each input is preserved.
///
/// Items are deduplicated by id, keeping the first occurrence. The feed
/// contract says fetched items are strictly newer than the watermark, in
/// which case dedup never fires; it exists so an off-by-one or retried
/// fetch that re-delivers the carry-over anchor cannot double it into the
/// partition.
pub fn merge_newest_first(fetched: Vec<Item>, current: Partition) -> Partition {
    let mut seen: HashSet<ItemId> = HashSet::with_capacity(fetched.len() + current.len());
    fetched
        .into_iter()
        .chain(current.into_items())
        .filter(|item| seen.insert(item.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64) -> Item {
        Item::new(ItemId::new(id), "someone", format!("item {id}"))
    }

    fn ids(p: &Partition) -> Vec<u64> {
        p.newest_first().map(|i| i.id.value()).collect()
    }

    #[test]
    fn fetched_items_land_in_front() {
        let current = Partition::from_newest_first(vec![item(10)]);
        let merged = merge_newest_first(vec![item(12), item(11)], current);

        assert_eq!(ids(&merged), vec![12, 11, 10]);
        assert_eq!(merged.watermark(), ItemId::new(12));
    }

    #[test]
    fn empty_fetch_leaves_partition_unchanged() {
        let current = Partition::from_newest_first(vec![item(5), item(4)]);
        let merged = merge_newest_first(Vec::new(), current.clone());
        assert_eq!(merged, current);
    }

    #[test]
    fn merge_into_empty_partition() {
        let merged = merge_newest_first(vec![item(2), item(1)], Partition::empty());
        assert_eq!(ids(&merged), vec![2, 1]);
    }

    #[test]
    fn duplicate_ids_are_dropped_keeping_first() {
        // An inclusive fetch can re-deliver the carry-over anchor.
        let current = Partition::from_newest_first(vec![item(10)]);
        let merged = merge_newest_first(vec![item(11), item(10)], current);

        assert_eq!(ids(&merged), vec![11, 10]);
    }

    #[test]
    fn relative_order_survives_dedup() {
        let current = Partition::from_newest_first(vec![item(7), item(5)]);
        let merged = merge_newest_first(vec![item(9), item(7), item(8)], current);

        assert_eq!(ids(&merged), vec![9, 7, 8, 5]);
    }
}
