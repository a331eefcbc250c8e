//! Exclusive write handle on a download destination.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Destination file opened for one attempt. Writes append at the current
/// offset. The handle is closed by [`DestinationFile::close`] on the success
/// path and by `Drop` on every other path.
#[derive(Debug)]
pub struct DestinationFile {
    file: File,
    written: u64,
}

impl DestinationFile {
    /// Create `path` for writing. Overwrites (truncates) if it already exists.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        Ok(DestinationFile {
            file,
            written: 0,
        })
    }

    /// Append `data` at the current offset.
    pub fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush file data to disk and close the handle.
    pub fn close(self) -> io::Result<u64> {
        self.file.sync_all()?;
        Ok(self.written)
    }
}
