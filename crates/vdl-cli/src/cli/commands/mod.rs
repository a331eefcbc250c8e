//! CLI command handlers. Each command is in its own file.

mod checksum;
mod completions;
mod get;
mod manifest;
mod verify;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use get::{run_get, GetArgs};
pub use manifest::run_manifest;
pub use verify::run_verify;
