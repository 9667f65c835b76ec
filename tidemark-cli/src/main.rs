//! # tidemark
//!
//! CLI runner for the tidemark feed archive and digest engine.
//!
//! ## Commands
//!
//! - `run`: one sync pass (the trigger entry point for cron and friends)
//! - `watch`: loop on a fixed interval, serializing invocations
//! - `show`: print a stored day's partition
//!
//! ## Example
//!
//! ```bash
//! # One pass against tidemark.toml in the working directory
//! tidemark run
//!
//! # Poll every five minutes
//! tidemark watch --interval-secs 300
//!
//! # Inspect what was archived for a given day
//! tidemark show --date 2024-05-20
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod adapters;
mod commands;
mod config;

use config::Config;

/// CLI runner for the tidemark feed archive and digest engine.
#[derive(Parser, Debug)]
#[command(name = "tidemark")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "tidemark.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one sync pass
    Run,

    /// Run sync passes on a fixed interval
    Watch {
        /// Seconds between passes (overrides the config file)
        #[arg(long)]
        interval_secs: Option<u64>,
    },

    /// Print a stored day's partition
    Show {
        /// Calendar date (YYYY-MM-DD, UTC); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Run => commands::run(&config).await,
        Commands::Watch { interval_secs } => commands::watch(&config, interval_secs).await,
        Commands::Show { date } => commands::show(&config, date).await,
    }
}
