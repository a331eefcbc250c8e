//! Batch downloads described by a TOML manifest.
//!
//! ```toml
//! [[download]]
//! url = "https://example.com/tool.tar.gz"
//! destination = "vendor/tool.tar.gz"
//! checksum = "2cf24dba..."
//! algorithm = "sha256"   # optional
//! retries = 2            # optional
//! ```
//!
//! Relative destinations resolve against the manifest's directory. Entries
//! run one after another and the run stops at the first failure.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::DigestAlgorithm;
use crate::downloader::{DownloadError, DownloadRequest, Downloader, Verified};
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    pub url: String,
    pub destination: PathBuf,
    pub checksum: String,
    #[serde(default)]
    pub algorithm: Option<DigestAlgorithm>,
    #[serde(default)]
    pub retries: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(rename = "download", default)]
    pub entries: Vec<ManifestEntry>,
}

/// Values applied to entries that leave `algorithm` or `retries` unset.
#[derive(Debug, Clone, Copy)]
pub struct EntryDefaults {
    pub algorithm: DigestAlgorithm,
    pub retries: u32,
}

/// Which entry failed and why.
#[derive(Debug, thiserror::Error)]
#[error("manifest entry {index} ({url}) failed: {source}")]
pub struct EntryFailed {
    pub index: usize,
    pub url: String,
    pub source: DownloadError,
}

impl Manifest {
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self> {
        let mut manifest: Manifest = toml::from_str(text).context("invalid manifest")?;
        for (i, entry) in manifest.entries.iter_mut().enumerate() {
            if entry.checksum.is_empty() {
                bail!("manifest entry {} ({}) has an empty checksum", i, entry.url);
            }
            if entry.destination.is_relative() {
                entry.destination = base_dir.join(&entry.destination);
            }
        }
        Ok(manifest)
    }

    /// Build the download request for each entry.
    pub fn requests(&self, defaults: EntryDefaults) -> Vec<DownloadRequest> {
        self.entries
            .iter()
            .map(|e| {
                DownloadRequest::new(
                    e.url.clone(),
                    e.destination.clone(),
                    e.checksum.clone(),
                    e.algorithm.unwrap_or(defaults.algorithm),
                )
                .with_retries(e.retries.unwrap_or(defaults.retries))
            })
            .collect()
    }
}

/// Read and validate a manifest file.
pub fn load(path: &Path) -> Result<Manifest> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Manifest::parse(&text, base_dir).with_context(|| format!("load {}", path.display()))
}

/// Download every entry in order; stops at the first failure.
pub fn run<T: Transport>(
    manifest: &Manifest,
    downloader: &Downloader<T>,
    defaults: EntryDefaults,
) -> Result<Vec<Verified>, EntryFailed> {
    let mut done = Vec::with_capacity(manifest.entries.len());
    for (index, request) in manifest.requests(defaults).iter().enumerate() {
        tracing::info!(index, url = request.url(), "manifest entry");
        let verified = downloader.download(request).map_err(|source| EntryFailed {
            index,
            url: request.url().to_string(),
            source,
        })?;
        done.push(verified);
    }
    Ok(done)
}
