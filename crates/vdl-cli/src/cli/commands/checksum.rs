//! `vdl checksum <path>` – compute the digest of a file.

use anyhow::Result;
use std::path::Path;
use vdl_core::checksum;
use vdl_core::DigestAlgorithm;

/// Compute and print the digest of the given file.
pub async fn run_checksum(path: &Path, algorithm: DigestAlgorithm) -> Result<()> {
    let digest = checksum::digest_path(path, algorithm)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
