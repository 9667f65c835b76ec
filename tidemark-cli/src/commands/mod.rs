//! CLI command implementations.

mod run;
mod show;
mod watch;

pub use run::run;
pub use show::show;
pub use watch::watch;

use crate::adapters::{FileDigestSender, FsArchiveStore, JsonlFeedSource};
use crate::config::Config;
use tidemark_engine::SyncEngine;

/// Wire the engine to the local adapters described by `config`.
pub fn build_engine(
    config: &Config,
) -> SyncEngine<FsArchiveStore, JsonlFeedSource, FileDigestSender> {
    SyncEngine::new(
        FsArchiveStore::new(config.archive.root.clone()),
        JsonlFeedSource::new(config.feed.path.clone(), config.feed.page_size),
        FileDigestSender::new(config.digest.base_url.clone(), config.digest.output.clone()),
    )
}
