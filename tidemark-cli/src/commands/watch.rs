//! `tidemark watch` — invoke the engine on a fixed cadence.

use crate::commands::build_engine;
use crate::config::Config;
use anyhow::Result;
use std::time::Duration;
use tracing::{error, info};

/// Run the engine forever on a fixed interval.
///
/// Invocations are strictly sequential: the next tick is not serviced
/// until the previous run finishes, which is the serialization the
/// engine's store access depends on. A failed run is logged and retried
/// on the next tick; retry policy beyond that lives here, not in the
/// engine.
pub async fn watch(config: &Config, interval_secs: Option<u64>) -> Result<()> {
    let secs = interval_secs.unwrap_or(config.watch.interval_secs);
    let engine = build_engine(config);
    let mut interval = tokio::time::interval(Duration::from_secs(secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    info!(interval_secs = secs, "watch loop started");
    loop {
        interval.tick().await;
        match engine.run_once().await {
            Ok(report) => {
                info!(
                    rolled_over = report.rolled_over,
                    fetched = report.fetched,
                    archived = report.partition_size,
                    "run complete"
                );
            }
            Err(e) => error!(error = %e, "run failed, will retry on next tick"),
        }
    }
}
