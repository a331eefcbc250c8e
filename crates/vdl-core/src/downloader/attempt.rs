//! One attempt: prepare the destination, stream, hash, write, verify.

use super::error::DownloadError;
use super::request::DownloadRequest;
use crate::checksum::{self, DigestEngine};
use crate::retry::AttemptError;
use crate::storage::{self, DestinationFile};
use crate::transport::Transport;
use std::path::Path;

/// Bytes that made it to disk and their digest.
#[derive(Debug)]
pub(super) struct Streamed {
    pub(super) bytes: u64,
    pub(super) digest: String,
}

/// Outer error: fatal, never retried. Inner error: this attempt's bytes are
/// not trustworthy and the caller may retry.
pub(super) type AttemptResult = Result<Result<Streamed, AttemptError>, DownloadError>;

pub(super) fn run_attempt<T: Transport + ?Sized>(transport: &T, request: &DownloadRequest) -> AttemptResult {
    let destination = request.destination();

    storage::ensure_parent_dir(destination).map_err(|source| DownloadError::CreateDir {
        path: destination.parent().map(Path::to_path_buf).unwrap_or_default(),
        source,
    })?;
    let mut file = DestinationFile::create(destination).map_err(|source| {
        DownloadError::OpenDestination {
            path: destination.to_path_buf(),
            source,
        }
    })?;

    let mut engine = DigestEngine::new(request.algorithm());
    let streamed = transport.fetch(request.url(), &mut |chunk: &[u8]| {
        engine.update(chunk);
        file.append(chunk)
    });

    // The handle is closed here on both paths, before the result is acted on.
    let bytes = match streamed {
        Ok(()) => match file.close() {
            Ok(bytes) => bytes,
            Err(e) => return Ok(Err(AttemptError::Write(e))),
        },
        Err(e) => {
            drop(file);
            return Ok(Err(e));
        }
    };

    let actual = engine.finalize_hex();
    if !checksum::digest_matches(&actual, request.expected_digest()) {
        return Ok(Err(AttemptError::DigestMismatch {
            algorithm: request.algorithm(),
            expected: request.expected_digest().to_string(),
            actual,
        }));
    }
    Ok(Ok(Streamed {
        bytes,
        digest: actual,
    }))
}
