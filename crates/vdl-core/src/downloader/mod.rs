//! Checksum-verified, retrying downloader.
//!
//! Each attempt streams the body through the transport, feeding every chunk
//! to the digest engine and then to the destination file. The file is kept
//! only if the whole-stream digest equals the expected one; otherwise it is
//! deleted and the request is tried again while its retry budget lasts.
//! Attempts run strictly one after another in a bounded loop.

mod attempt;
mod error;
mod request;

pub use error::{DownloadError, ErrorClass};
pub use request::DownloadRequest;

use crate::retry::{classify, RetryDecision, RetryPolicy};
use crate::storage;
use crate::transport::Transport;

/// Successful outcome: the destination holds exactly `bytes` bytes whose
/// digest is `digest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verified {
    pub bytes: u64,
    pub digest: String,
    /// Attempts made, including the successful one.
    pub attempts: u32,
}

/// Runs [`DownloadRequest`]s over a transport with a backoff policy.
#[derive(Debug, Clone)]
pub struct Downloader<T> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: Transport> Downloader<T> {
    /// Downloader that retries immediately.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            policy: RetryPolicy::immediate(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Download `request.url()` to `request.destination()` and verify it.
    ///
    /// Configuration problems fail before any I/O. Failing to create the
    /// parent directory or open the destination fails immediately without
    /// retry. Transport, status, write and digest failures delete the partial
    /// file and are retried up to `request.retries()` times; the last such
    /// error is returned unchanged inside [`DownloadError::Attempt`].
    pub fn download(&self, request: &DownloadRequest) -> Result<Verified, DownloadError> {
        request.validate()?;

        let url = request.url();
        let destination = request.destination();
        let mut retries_remaining = request.retries();
        let mut attempt = 1u32;
        loop {
            tracing::debug!(url, attempt, algorithm = %request.algorithm(), "attempting download");

            let err = match attempt::run_attempt(&self.transport, request)? {
                Ok(streamed) => {
                    tracing::info!(
                        url,
                        attempt,
                        bytes = streamed.bytes,
                        path = %destination.display(),
                        "downloaded and verified checksum"
                    );
                    return Ok(Verified {
                        bytes: streamed.bytes,
                        digest: streamed.digest,
                        attempts: attempt,
                    });
                }
                Err(e) => e,
            };

            tracing::warn!(url, attempt, kind = ?classify(&err), "download failed: {}", err);
            tracing::debug!(path = %destination.display(), "deleting downloaded data");
            if let Err(source) = storage::remove_partial(destination) {
                tracing::warn!(path = %destination.display(), "failed to delete partial download: {}", source);
                return Err(DownloadError::Cleanup {
                    path: destination.to_path_buf(),
                    source,
                });
            }

            match self.policy.decide(attempt, retries_remaining) {
                RetryDecision::NoRetry => {
                    return Err(DownloadError::Attempt {
                        url: url.to_string(),
                        attempts: attempt,
                        source: err,
                    });
                }
                RetryDecision::RetryAfter(delay) => {
                    tracing::info!(
                        url,
                        retries_remaining,
                        "retrying - {} attempt(s) remaining",
                        retries_remaining
                    );
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                    advance(&mut attempt, &mut retries_remaining);
                }
            }
        }
    }
}

/// Spend one retry. The attempt number stays put at `u32::MAX` so an
/// unbounded budget never overflows the counter.
fn advance(attempt: &mut u32, retries_remaining: &mut u32) {
    *retries_remaining = retries_remaining.saturating_sub(1);
    *attempt = attempt.saturating_add(1);
}

/// One-off download with immediate retries.
pub fn download<T: Transport + ?Sized>(
    transport: &T,
    request: &DownloadRequest,
) -> Result<Verified, DownloadError> {
    Downloader::new(transport).download(request)
}
