//! Digest rendering.
//!
//! Turns a day's items into the subject and body of one notification.
//! Storage order is newest-first, so the renderer walks the slice in
//! reverse to read chronologically.

use tidemark_types::Item;

/// A rendered digest, ready for a sender to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    /// Summary line carrying the total item count.
    pub subject: String,
    /// Plain-text body, one entry per item, oldest first.
    pub body: String,
}

/// Render a digest for items given in newest-first order.
///
/// Each entry shows the author handle, the body text, and the permalink
/// derived under `base_url`, separated by a rule so the mail stays
/// readable in plain text.
pub fn render(items: &[Item], base_url: &str) -> Digest {
    let mut body = String::new();
    for item in items.iter().rev() {
        body.push_str(&format!(
            "@{}: {}\n{}\n\n--\n",
            item.author,
            item.body,
            item.permalink_under(base_url)
        ));
    }

    Digest {
        subject: format!("Items from the past 24h ({})", items.len()),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidemark_types::ItemId;

    const BASE: &str = "https://example.org";

    fn item(id: u64, author: &str, body: &str) -> Item {
        Item::new(ItemId::new(id), author, body)
    }

    #[test]
    fn subject_carries_item_count() {
        let items = vec![item(2, "a", "x"), item(1, "b", "y")];
        let digest = render(&items, BASE);
        assert_eq!(digest.subject, "Items from the past 24h (2)");
    }

    #[test]
    fn body_reads_oldest_first() {
        // Storage order newest-first; the rendered body must reverse it.
        let items = vec![item(3, "late", "newest"), item(1, "early", "oldest")];
        let digest = render(&items, BASE);

        let first = digest.body.find("@early").unwrap();
        let second = digest.body.find("@late").unwrap();
        assert!(first < second, "oldest entry must render first");
    }

    #[test]
    fn entries_include_handle_body_and_permalink() {
        let items = vec![item(42, "alice", "hello world")];
        let digest = render(&items, BASE);

        assert!(digest.body.contains("@alice: hello world"));
        assert!(digest.body.contains("https://example.org/alice/status/42"));
    }

    #[test]
    fn body_reverses_arrival_order_not_id_order() {
        // Arrival order is authoritative even when it disagrees with ids.
        let items = vec![item(5, "first", "a"), item(7, "second", "b")];
        let digest = render(&items, BASE);

        let second = digest.body.find("@second").unwrap();
        let first = digest.body.find("@first").unwrap();
        assert!(second < first);
    }

    #[test]
    fn empty_input_renders_empty_body() {
        let digest = render(&[], BASE);
        assert_eq!(digest.subject, "Items from the past 24h (0)");
        assert!(digest.body.is_empty());
    }
}
