//! `tidemark run` — one engine invocation.

use crate::commands::build_engine;
use crate::config::Config;
use anyhow::Result;

/// Run the sync engine once and report what it did.
pub async fn run(config: &Config) -> Result<()> {
    let engine = build_engine(config);
    let report = engine.run_once().await?;

    if report.rolled_over {
        println!("Rolled over to a new day");
    }
    if let Some(count) = report.digest_items {
        println!("Digest sent for yesterday ({count} items)");
    }
    println!(
        "{} new items fetched, {} items archived for today",
        report.fetched, report.partition_size
    );
    Ok(())
}
