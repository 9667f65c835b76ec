//! JSON-lines feed source.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tidemark_engine::{FeedError, FeedSource};
use tidemark_types::{Item, ItemId};
use tracing::debug;

/// Reads items from a local JSON-lines file, one item object per line.
///
/// Stands in for a real timeline API: `fetch_since` returns the items
/// with ids strictly greater than the watermark, newest-first, capped at
/// `page_size` (keeping the newest ones, as a timeline API would). A
/// missing file is an empty feed, so a fresh setup runs before anyone
/// has produced items.
#[derive(Debug, Clone)]
pub struct JsonlFeedSource {
    path: PathBuf,
    page_size: usize,
}

impl JsonlFeedSource {
    /// Create a source reading from `path`, returning at most `page_size`
    /// items per fetch.
    pub fn new(path: impl Into<PathBuf>, page_size: usize) -> Self {
        Self {
            path: path.into(),
            page_size,
        }
    }
}

#[async_trait]
impl FeedSource for JsonlFeedSource {
    async fn fetch_since(&self, watermark: ItemId) -> Result<Vec<Item>, FeedError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "feed file not present, empty page");
                return Ok(Vec::new());
            }
            Err(e) => return Err(FeedError::Transport(e.to_string())),
        };

        let mut items = Vec::new();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let item: Item = serde_json::from_str(line).map_err(|e| {
                FeedError::Malformed(format!(
                    "{} line {}: {e}",
                    self.path.display(),
                    lineno + 1
                ))
            })?;
            if item.id > watermark {
                items.push(item);
            }
        }

        // Newest-first; drop the oldest overflow beyond one page.
        items.sort_by(|a, b| b.id.cmp(&a.id));
        items.truncate(self.page_size);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn feed_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    fn line(id: u64) -> String {
        format!(r#"{{"id":{id},"author":"a","body":"item {id}"}}"#)
    }

    #[tokio::test]
    async fn returns_only_items_newer_than_watermark() {
        let lines: Vec<String> = vec![line(1), line(2), line(3)];
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = feed_file(&refs);
        let source = JsonlFeedSource::new(file.path(), 200);

        let items = source.fetch_since(ItemId::new(2)).await.unwrap();

        let ids: Vec<u64> = items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn results_are_newest_first() {
        let lines: Vec<String> = vec![line(5), line(9), line(7)];
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = feed_file(&refs);
        let source = JsonlFeedSource::new(file.path(), 200);

        let items = source.fetch_since(ItemId::ZERO).await.unwrap();

        let ids: Vec<u64> = items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![9, 7, 5]);
    }

    #[tokio::test]
    async fn page_size_keeps_the_newest_items() {
        let lines: Vec<String> = (1..=5).map(line).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let file = feed_file(&refs);
        let source = JsonlFeedSource::new(file.path(), 2);

        let items = source.fetch_since(ItemId::ZERO).await.unwrap();

        let ids: Vec<u64> = items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![5, 4]);
    }

    #[tokio::test]
    async fn missing_file_is_an_empty_page() {
        let source = JsonlFeedSource::new("/definitely/not/here.jsonl", 200);
        let items = source.fetch_since(ItemId::ZERO).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn blank_lines_are_skipped() {
        let l = line(1);
        let file = feed_file(&[l.as_str(), "", "   "]);
        let source = JsonlFeedSource::new(file.path(), 200);

        let items = source.fetch_since(ItemId::ZERO).await.unwrap();
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn malformed_line_reports_its_number() {
        let l = line(1);
        let file = feed_file(&[l.as_str(), "{broken"]);
        let source = JsonlFeedSource::new(file.path(), 200);

        let result = source.fetch_since(ItemId::ZERO).await;
        match result {
            Err(FeedError::Malformed(msg)) => assert!(msg.contains("line 2"), "{msg}"),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
