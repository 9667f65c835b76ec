//! File/stdout digest sender.

use async_trait::async_trait;
use std::path::PathBuf;
use tidemark_core::digest;
use tidemark_engine::{DigestError, DigestSender};
use tidemark_types::Item;
use tracing::info;

/// Renders digests and appends them to a file, or prints to stdout.
///
/// Stands in for a mail transport; the rendering (oldest-first body,
/// count in the subject) is identical to what a mail-backed sender
/// would dispatch.
#[derive(Debug, Clone)]
pub struct FileDigestSender {
    base_url: String,
    output: Option<PathBuf>,
}

impl FileDigestSender {
    /// Create a sender. With `output` unset, digests go to stdout.
    pub fn new(base_url: impl Into<String>, output: Option<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            output,
        }
    }
}

#[async_trait]
impl DigestSender for FileDigestSender {
    async fn send(&self, items: &[Item]) -> Result<(), DigestError> {
        let rendered = digest::render(items, &self.base_url);
        let text = format!("Subject: {}\n\n{}\n", rendered.subject, rendered.body);

        match &self.output {
            Some(path) => {
                let mut existing = match tokio::fs::read_to_string(path).await {
                    Ok(existing) => existing,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
                    Err(e) => return Err(DigestError::Dispatch(e.to_string())),
                };
                existing.push_str(&text);
                tokio::fs::write(path, existing)
                    .await
                    .map_err(|e| DigestError::Dispatch(e.to_string()))?;
                info!(path = %path.display(), items = items.len(), "digest appended");
            }
            None => {
                println!("{text}");
                info!(items = items.len(), "digest printed to stdout");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidemark_types::ItemId;

    fn item(id: u64) -> Item {
        Item::new(ItemId::new(id), "someone", format!("item {id}"))
    }

    #[tokio::test]
    async fn digest_lands_in_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digests.txt");
        let sender = FileDigestSender::new("https://example.org", Some(path.clone()));

        sender.send(&[item(2), item(1)]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Subject: Items from the past 24h (2)"));
        assert!(written.contains("https://example.org/someone/status/1"));
    }

    #[tokio::test]
    async fn repeated_sends_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digests.txt");
        let sender = FileDigestSender::new("https://example.org", Some(path.clone()));

        sender.send(&[item(1)]).await.unwrap();
        sender.send(&[item(2)]).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("Subject:").count(), 2);
    }
}
