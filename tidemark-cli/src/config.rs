//! Configuration loading for the tidemark CLI.
//!
//! Configuration is loaded from a TOML file (default: `tidemark.toml`).
//! The struct is built once at startup and passed by reference into the
//! engine's collaborators; there is no process-wide mutable state.

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration for the tidemark CLI.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Archive storage configuration.
    #[serde(default)]
    pub archive: ArchiveConfig,
    /// Feed source configuration.
    #[serde(default)]
    pub feed: FeedConfig,
    /// Digest output configuration.
    #[serde(default)]
    pub digest: DigestConfig,
    /// Watch loop configuration.
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Archive storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveConfig {
    /// Root directory for date-partitioned blobs (default: `archive`).
    #[serde(default = "default_archive_root")]
    pub root: PathBuf,
}

/// Feed source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Path to the JSON-lines feed file (default: `feed.jsonl`).
    #[serde(default = "default_feed_path")]
    pub path: PathBuf,
    /// Maximum items per fetch (default: 200).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Digest output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DigestConfig {
    /// File the rendered digest is appended to; stdout when unset.
    pub output: Option<PathBuf>,
    /// Base URL for item permalinks (default: `https://twitter.com`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Watch loop configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Seconds between engine invocations (default: 900).
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

// Default value functions
fn default_archive_root() -> PathBuf {
    PathBuf::from("archive")
}

fn default_feed_path() -> PathBuf {
    PathBuf::from("feed.jsonl")
}

fn default_page_size() -> usize {
    200
}

fn default_base_url() -> String {
    "https://twitter.com".to_string()
}

fn default_interval_secs() -> u64 {
    900
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            root: default_archive_root(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: default_feed_path(),
            page_size: default_page_size(),
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            output: None,
            base_url: default_base_url(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load from a file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &std::path::Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Failed to parse configuration file.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
}
