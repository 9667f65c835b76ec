//! `tidemark show` — print a stored partition.

use crate::adapters::FsArchiveStore;
use crate::config::Config;
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use tidemark_core::PartitionKey;
use tidemark_engine::{ArchiveStore, Lookup};

/// Print the partition for `date` (default: today, UTC).
pub async fn show(config: &Config, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| Utc::now().date_naive());
    let key = PartitionKey::for_date(date);
    let store = FsArchiveStore::new(config.archive.root.clone());

    match store.get(&key).await? {
        Lookup::Missing => println!("No partition stored for {date}"),
        Lookup::Found(partition) if partition.is_empty() => {
            println!("{date}: archived, no items");
        }
        Lookup::Found(partition) => {
            println!(
                "{date}: {} items (watermark {})",
                partition.len(),
                partition.watermark()
            );
            for item in partition.oldest_first() {
                println!("  [{}] @{}: {}", item.id, item.author, item.body);
            }
        }
    }
    Ok(())
}
