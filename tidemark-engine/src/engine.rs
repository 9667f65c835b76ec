//! The daily synchronization state machine.

use crate::error::EngineResult;
use crate::feed::FeedSource;
use crate::sender::DigestSender;
use crate::store::{ArchiveStore, Lookup};
use chrono::Utc;
use tidemark_core::{merge_newest_first, DayWindow};
use tidemark_types::{Item, Partition};
use tracing::{debug, info};

/// What one engine run did.
///
/// The trigger layer logs this; nothing in it feeds back into the next
/// run, which recomputes everything from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Whether the run took the rollover path (today's key was missing).
    pub rolled_over: bool,
    /// Number of items in the digest sent for yesterday, if one was sent.
    pub digest_items: Option<usize>,
    /// Number of new items returned by the feed.
    pub fetched: usize,
    /// Size of today's partition when the run finished.
    pub partition_size: usize,
}

/// Orchestrates one synchronization pass per trigger.
///
/// Each run recomputes its state from the store; nothing persists across
/// invocations inside the engine. Concurrent runs are not coordinated
/// here — the trigger is expected to serialize invocations.
///
/// The per-run sequence:
///
/// 1. probe today's partition; if present, resume it
/// 2. otherwise reconcile with yesterday: digest its items, then seed
///    today with the single max-id item as the dedup anchor
/// 3. derive the watermark from whatever partition we now hold
/// 4. fetch items newer than the watermark; an empty page ends the run
/// 5. merge newest-first and persist in a single put
pub struct SyncEngine<S, F, D> {
    store: S,
    feed: F,
    sender: D,
}

impl<S, F, D> SyncEngine<S, F, D>
where
    S: ArchiveStore,
    F: FeedSource,
    D: DigestSender,
{
    /// Create an engine over the given collaborators.
    pub fn new(store: S, feed: F, sender: D) -> Self {
        Self {
            store,
            feed,
            sender,
        }
    }

    /// Run one pass using the current UTC time as the reference instant.
    ///
    /// This is the zero-argument trigger entry point for schedulers.
    pub async fn run_once(&self) -> EngineResult<RunReport> {
        self.run_at(DayWindow::at(Utc::now())).await
    }

    /// Run one pass against an explicit day window.
    ///
    /// Both the "today" and "yesterday" keys are derived from the window,
    /// so a run never mixes dates computed at different moments.
    pub async fn run_at(&self, window: DayWindow) -> EngineResult<RunReport> {
        let today = window.today_key();
        let mut rolled_over = false;
        let mut digest_items = None;

        let current = match self.store.get(&today).await? {
            Lookup::Found(partition) => {
                debug!(key = %today, items = partition.len(), "resuming today's partition");
                partition
            }
            Lookup::Missing => {
                rolled_over = true;
                let carry = self.rollover(&window, &mut digest_items).await?;
                // Seed before fetching so a crash here leaves a re-enterable
                // state: the next run resumes today with the same watermark.
                info!(key = %today, items = carry.len(), "seeding today's partition");
                self.store.put(&today, &carry).await?;
                carry
            }
        };

        let watermark = current.watermark();
        let fetched = self.feed.fetch_since(watermark).await?;
        info!(%watermark, count = fetched.len(), "fetched new items");

        if fetched.is_empty() {
            return Ok(RunReport {
                rolled_over,
                digest_items,
                fetched: 0,
                partition_size: current.len(),
            });
        }

        let fetched_count = fetched.len();
        let merged = merge_newest_first(fetched, current);
        self.store.put(&today, &merged).await?;

        Ok(RunReport {
            rolled_over,
            digest_items,
            fetched: fetched_count,
            partition_size: merged.len(),
        })
    }

    /// Reconcile with yesterday's partition and compute the carry-over.
    ///
    /// A non-empty yesterday gets its digest sent *before* anything is
    /// written, so a send failure aborts the run with yesterday's data
    /// intact and the retry re-attempts the digest (at-least-once). The
    /// carry-over is then the single item holding yesterday's maximum id,
    /// which anchors dedup without reappearing in any digest.
    async fn rollover(
        &self,
        window: &DayWindow,
        digest_items: &mut Option<usize>,
    ) -> EngineResult<Partition> {
        let yesterday = window.yesterday_key();

        let partition = match self.store.get(&yesterday).await? {
            Lookup::Missing => {
                info!(key = %yesterday, "no partition for yesterday");
                return Ok(Partition::empty());
            }
            Lookup::Found(partition) => partition,
        };

        if partition.is_empty() {
            return Ok(Partition::empty());
        }

        info!(items = partition.len(), "sending digest for yesterday");
        let items: Vec<Item> = partition.newest_first().cloned().collect();
        self.sender.send(&items).await?;
        *digest_items = Some(items.len());

        // Non-empty partition always has a max item; stay total anyway.
        Ok(match partition.max_item() {
            Some(anchor) => Partition::from_newest_first(vec![anchor.clone()]),
            None => Partition::empty(),
        })
    }
}
