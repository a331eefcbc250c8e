//! `vdl get <url> <dest> --checksum <hex>` – one verified download.

use anyhow::{Context, Result};
use std::path::PathBuf;
use vdl_core::config::VdlConfig;
use vdl_core::{CurlTransport, DigestAlgorithm, DownloadRequest, Downloader};

#[derive(Debug)]
pub struct GetArgs {
    pub url: String,
    pub dest: PathBuf,
    pub checksum: String,
    pub algorithm: Option<DigestAlgorithm>,
    pub retries: Option<u32>,
}

impl GetArgs {
    /// Fill unset options from config.
    pub fn into_request(self, cfg: &VdlConfig) -> DownloadRequest {
        DownloadRequest::new(
            self.url,
            self.dest,
            self.checksum,
            self.algorithm.unwrap_or(cfg.default_algorithm),
        )
        .with_retries(self.retries.unwrap_or(cfg.retries))
    }
}

pub async fn run_get(cfg: &VdlConfig, args: GetArgs) -> Result<()> {
    let request = args.into_request(cfg);
    let downloader =
        Downloader::new(CurlTransport::new(cfg.http_options())).with_policy(cfg.retry_policy());

    let (request, result) = tokio::task::spawn_blocking(move || {
        let result = downloader.download(&request);
        (request, result)
    })
    .await
    .context("download task failed")?;
    let verified = result?;

    println!(
        "{}  {} ({} bytes, {} attempt(s))",
        verified.digest,
        request.destination().display(),
        verified.bytes,
        verified.attempts
    );
    Ok(())
}
