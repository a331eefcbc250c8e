//! Per-attempt error type for retry classification.

use crate::checksum::DigestAlgorithm;
use std::fmt;
use std::io;

/// Why a single download attempt failed. Every variant is retryable; the
/// downloader deletes the partial file and tries again while budget remains.
#[derive(Debug)]
pub enum AttemptError {
    /// Curl reported an error (timeout, connection, etc.).
    Curl(curl::Error),
    /// Response had a non-2xx status.
    Http(u32),
    /// The byte stream broke off before its normal end.
    Stream(io::Error),
    /// Writing a received chunk to the destination failed.
    Write(io::Error),
    /// The whole body arrived but its digest is not the expected one.
    DigestMismatch {
        algorithm: DigestAlgorithm,
        expected: String,
        actual: String,
    },
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Curl(e) => write!(f, "{}", e),
            AttemptError::Http(code) => write!(f, "unexpected status code {}", code),
            AttemptError::Stream(e) => write!(f, "stream error: {}", e),
            AttemptError::Write(e) => write!(f, "write failed: {}", e),
            AttemptError::DigestMismatch {
                algorithm,
                expected,
                actual,
            } => write!(
                f,
                "downloaded checksum {} does not match the expected {} checksum {}",
                actual, algorithm, expected
            ),
        }
    }
}

impl std::error::Error for AttemptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttemptError::Curl(e) => Some(e),
            AttemptError::Stream(e) | AttemptError::Write(e) => Some(e),
            AttemptError::Http(_) | AttemptError::DigestMismatch { .. } => None,
        }
    }
}
