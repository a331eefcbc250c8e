//! Streaming transport: one GET-style request per call.
//!
//! A transport pushes body chunks into a sink in arrival order and returns
//! exactly once: `Ok(())` at normal end of stream, `Err` on any failure
//! (connection, non-2xx status, broken stream, or a sink error).

mod http;

pub use http::{CurlTransport, HttpOptions};

use crate::retry::AttemptError;
use std::io;

/// Receives each body chunk. Returning an error aborts the transfer; the
/// transport reports it as [`AttemptError::Write`].
pub type ChunkSink<'a> = dyn FnMut(&[u8]) -> io::Result<()> + 'a;

/// A capability that performs a single streaming request for `url`.
///
/// Implementations block until the stream ends. Async callers should run
/// them on a blocking thread (`tokio::task::spawn_blocking`).
pub trait Transport {
    fn fetch(&self, url: &str, sink: &mut ChunkSink<'_>) -> Result<(), AttemptError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn fetch(&self, url: &str, sink: &mut ChunkSink<'_>) -> Result<(), AttemptError> {
        (**self).fetch(url, sink)
    }
}
