//! Logging init: file under XDG state dir, or graceful fallback to stderr.
//!
//! The downloader itself only emits `tracing` events; whichever subscriber
//! the caller installs decides where attempt/retry diagnostics end up.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,vdl_core=debug,vdl=debug";

/// Writer that is either the log file or stderr (used when the file handle
/// cannot be cloned).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// `RUST_LOG` wins; otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// `~/.local/state/vdl/vdl.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vdl")?;
    let log_dir = xdg_dirs.get_state_home();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("create log dir {}", log_dir.display()))?;
    Ok(log_dir.join("vdl.log"))
}

/// Initialize structured logging to `~/.local/state/vdl/vdl.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(BoxMakeWriter::new(FileMakeWriter(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::info!("vdl logging initialized at {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only (no file). `verbose` lowers the default
/// level so attempt and retry messages show on the terminal.
pub fn init_logging_stderr(verbose: bool) {
    let fallback = if verbose { DEFAULT_FILTER } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// File logging when possible, stderr otherwise. Never fails.
pub fn init_or_fallback(verbose: bool) {
    if verbose {
        init_logging_stderr(true);
        return;
    }
    if let Err(e) = init_logging() {
        init_logging_stderr(false);
        tracing::warn!("file logging unavailable, using stderr: {:#}", e);
    }
}
