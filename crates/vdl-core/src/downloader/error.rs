//! Call-level download errors.

use crate::checksum::{DigestAlgorithm, UnknownAlgorithm};
use crate::retry::{classify, AttemptError, ErrorKind};
use std::io;
use std::path::PathBuf;

/// Coarse error class for callers that only need to know which kind of
/// problem ended the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Bad request; nothing was attempted.
    Configuration,
    /// Directory or destination could not be prepared; not retried.
    Environment,
    /// Every attempt failed on the network/stream side (or on a write).
    Transport,
    /// Every attempt failed with a digest mismatch on the last try.
    Integrity,
    /// Partial data could not be deleted.
    Cleanup,
}

/// Why `download` gave up.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("{algorithm} checksum of {url} not provided, refusing to download")]
    MissingChecksum {
        url: String,
        algorithm: DigestAlgorithm,
    },

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnknownAlgorithm),

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to open {} for writing: {source}", .path.display())]
    OpenDestination { path: PathBuf, source: io::Error },

    /// The last attempt's error, unchanged, once the retry budget is spent.
    #[error("download of {url} failed: {source}")]
    Attempt {
        url: String,
        attempts: u32,
        source: AttemptError,
    },

    #[error("failed to delete partial download {}: {source}", .path.display())]
    Cleanup { path: PathBuf, source: io::Error },
}

impl DownloadError {
    pub fn class(&self) -> ErrorClass {
        match self {
            DownloadError::MissingChecksum { .. }
            | DownloadError::InvalidUrl { .. }
            | DownloadError::UnsupportedAlgorithm(_) => ErrorClass::Configuration,
            DownloadError::CreateDir { .. } | DownloadError::OpenDestination { .. } => {
                ErrorClass::Environment
            }
            DownloadError::Attempt { source, .. } => match classify(source) {
                ErrorKind::Integrity => ErrorClass::Integrity,
                _ => ErrorClass::Transport,
            },
            DownloadError::Cleanup { .. } => ErrorClass::Cleanup,
        }
    }

    /// True when the call ended because retryable attempts ran out, as
    /// opposed to a fatal error that was never retried.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, DownloadError::Attempt { .. })
    }

    /// The final attempt's error, if the call got that far.
    pub fn attempt_error(&self) -> Option<&AttemptError> {
        match self {
            DownloadError::Attempt { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Number of attempts made before giving up (0 for fatal errors raised
    /// before or outside the retry loop).
    pub fn attempts(&self) -> u32 {
        match self {
            DownloadError::Attempt { attempts, .. } => *attempts,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_error_message_includes_url_and_reason() {
        let e = DownloadError::Attempt {
            url: "https://example.com/x".into(),
            attempts: 3,
            source: AttemptError::Http(500),
        };
        assert_eq!(
            e.to_string(),
            "download of https://example.com/x failed: unexpected status code 500"
        );
        assert_eq!(e.class(), ErrorClass::Transport);
        assert!(e.is_exhausted());
        assert_eq!(e.attempts(), 3);
    }

    #[test]
    fn digest_mismatch_is_integrity_class() {
        let e = DownloadError::Attempt {
            url: "u".into(),
            attempts: 1,
            source: AttemptError::DigestMismatch {
                algorithm: DigestAlgorithm::Sha256,
                expected: "a".into(),
                actual: "b".into(),
            },
        };
        assert_eq!(e.class(), ErrorClass::Integrity);
    }

    #[test]
    fn environment_errors_are_not_exhausted() {
        let e = DownloadError::CreateDir {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(e.class(), ErrorClass::Environment);
        assert!(!e.is_exhausted());
        assert!(e.attempt_error().is_none());
        assert_eq!(e.to_string(), "failed to create directory /nope: denied");
    }
}
