//! Disk I/O for the download destination.
//!
//! Synchronous primitives only: ensure the parent directory, create/truncate
//! the destination, append chunks, close, and delete partial data.

mod file;

pub use file::DestinationFile;

use std::fs;
use std::io;
use std::path::Path;

/// Create the parent directory of `path` (and its ancestors) if missing.
/// A bare file name has no parent to create.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Delete partially downloaded data at `path`.
///
/// Returns `Ok(true)` if a file was removed, `Ok(false)` if there was nothing
/// to remove. Any error other than "not found" is returned.
pub fn remove_partial(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
