//! Digest computation and verification.
//!
//! The downloader feeds a [`DigestEngine`] inline with the stream; the
//! path helpers here hash files already on disk (e.g. `vdl checksum`).

mod algorithm;
mod engine;

pub use algorithm::{DigestAlgorithm, UnknownAlgorithm};
pub use engine::DigestEngine;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the digest of a file and return it as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn digest_path(path: &Path, algorithm: DigestAlgorithm) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut engine = DigestEngine::new(algorithm);
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        engine.update(&buf[..n]);
    }
    Ok(engine.finalize_hex())
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    digest_path(path, DigestAlgorithm::Sha256)
}

/// Exact comparison used everywhere a digest is checked: the computed
/// lowercase hex must equal `expected` byte for byte.
pub fn digest_matches(computed: &str, expected: &str) -> bool {
    computed == expected
}

/// Hash `path` and compare against `expected`. Returns the computed digest
/// alongside the verdict so callers can report both values.
pub fn verify_path(path: &Path, algorithm: DigestAlgorithm, expected: &str) -> Result<(bool, String)> {
    let computed = digest_path(path, algorithm)?;
    Ok((digest_matches(&computed, expected), computed))
}
