//! One navigation build: config → content scan → resolution.
//!
//! Every build starts from scratch. The config file is re-read, the content
//! directory re-scanned, and a new [`Manifest`] produced; nothing carries
//! over between runs, so repeated builds (e.g. from a file watcher) need no
//! coordination beyond not overlapping.

use crate::config::{self, ConfigError, NavConfig};
use crate::content::{self, ScanError};
use crate::resolve::{self, ConfigurationError};
use crate::types::NavEntry;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Navigation error: {0}")]
    Resolve(#[from] ConfigurationError),
}

/// Result of one build.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Directory that was scanned.
    pub content_dir: PathBuf,
    /// Number of pages found in the content directory.
    pub content_count: usize,
    /// Resolved topics, in declaration order.
    pub navigation: Vec<NavEntry>,
}

impl Manifest {
    /// Total number of page links across all topics.
    pub fn link_count(&self) -> usize {
        self.navigation.iter().map(|t| t.items().len()).sum()
    }
}

/// Build the navigation for the config at `config_path`.
///
/// `content_override` replaces the config's `content_root`.
pub fn build(config_path: &Path, content_override: Option<&Path>) -> Result<Manifest, BuildError> {
    let config = config::load_config(config_path)?;
    let content_dir = content_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.content_dir(config_path));
    build_with(&config, &content_dir)
}

/// Build from an already-loaded config.
pub fn build_with(config: &NavConfig, content_dir: &Path) -> Result<Manifest, BuildError> {
    info!("Scanning {}", content_dir.display());
    let entries = content::scan(content_dir, &config.extensions)?;
    info!("Found {} pages", entries.len());

    let navigation = resolve::resolve(
        &config.topics,
        &config.excludes,
        &config.overrides,
        &entries,
    )?;

    Ok(Manifest {
        content_dir: content_dir.to_path_buf(),
        content_count: entries.len(),
        navigation,
    })
}
