pub mod config;
pub mod logging;

pub mod checksum;
pub mod downloader;
pub mod manifest;
pub mod retry;
pub mod storage;
pub mod transport;

pub use checksum::{DigestAlgorithm, DigestEngine};
pub use downloader::{download, DownloadError, DownloadRequest, Downloader, ErrorClass, Verified};
pub use transport::{CurlTransport, HttpOptions, Transport};
