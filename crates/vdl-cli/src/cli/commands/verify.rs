//! `vdl verify <path> <hex>` – check a file against an expected digest.

use anyhow::{bail, Result};
use std::path::Path;
use vdl_core::checksum;
use vdl_core::DigestAlgorithm;

pub async fn run_verify(path: &Path, expected: &str, algorithm: DigestAlgorithm) -> Result<()> {
    let (ok, computed) = checksum::verify_path(path, algorithm, expected)?;
    if !ok {
        bail!(
            "{}: {} checksum {} does not match the expected {}",
            path.display(),
            algorithm,
            computed,
            expected
        );
    }
    println!("{}: OK", path.display());
    Ok(())
}
