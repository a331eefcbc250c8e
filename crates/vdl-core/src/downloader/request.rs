//! Immutable description of one verified download.

use super::error::DownloadError;
use crate::checksum::DigestAlgorithm;
use std::path::{Path, PathBuf};

/// What to fetch, where to put it, and the digest it must have.
///
/// Every attempt reuses the same request; only the retry budget the
/// downloader tracks alongside it changes between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    destination: PathBuf,
    expected_digest: String,
    algorithm: DigestAlgorithm,
    retries: u32,
}

impl DownloadRequest {
    /// New request with no retries.
    pub fn new(
        url: impl Into<String>,
        destination: impl Into<PathBuf>,
        expected_digest: impl Into<String>,
        algorithm: DigestAlgorithm,
    ) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
            expected_digest: expected_digest.into(),
            algorithm,
            retries: 0,
        }
    }

    /// Like `new`, with the algorithm given by name (e.g. `"sha256"`).
    pub fn parse(
        url: impl Into<String>,
        destination: impl Into<PathBuf>,
        expected_digest: impl Into<String>,
        algorithm: &str,
    ) -> Result<Self, DownloadError> {
        let algorithm: DigestAlgorithm = algorithm.parse()?;
        Ok(Self::new(url, destination, expected_digest, algorithm))
    }

    /// Allow `retries` more attempts after the first one fails.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn expected_digest(&self) -> &str {
        &self.expected_digest
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Checks that must pass before any I/O happens.
    pub fn validate(&self) -> Result<(), DownloadError> {
        if self.expected_digest.is_empty() {
            return Err(DownloadError::MissingChecksum {
                url: self.url.clone(),
                algorithm: self.algorithm,
            });
        }
        url::Url::parse(&self.url).map_err(|source| DownloadError::InvalidUrl {
            url: self.url.clone(),
            source,
        })?;
        Ok(())
    }
}
