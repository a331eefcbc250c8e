//! `vdl manifest <path>` – download every entry of a manifest.

use anyhow::{Context, Result};
use std::path::Path;
use vdl_core::config::VdlConfig;
use vdl_core::manifest::{self, EntryDefaults};
use vdl_core::{CurlTransport, Downloader};

pub async fn run_manifest(cfg: &VdlConfig, path: &Path) -> Result<()> {
    let m = manifest::load(path)?;
    if m.entries.is_empty() {
        println!("No downloads in {}.", path.display());
        return Ok(());
    }
    let defaults = EntryDefaults {
        algorithm: cfg.default_algorithm,
        retries: cfg.retries,
    };
    let downloader =
        Downloader::new(CurlTransport::new(cfg.http_options())).with_policy(cfg.retry_policy());

    let entries = m.entries.clone();
    let verified = tokio::task::spawn_blocking(move || manifest::run(&m, &downloader, defaults))
        .await
        .context("manifest task failed")??;

    for (entry, v) in entries.iter().zip(&verified) {
        println!("{}  {}", v.digest, entry.destination.display());
    }
    println!("{} download(s) verified.", verified.len());
    Ok(())
}
