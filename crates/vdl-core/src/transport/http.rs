//! libcurl-backed transport.

use super::{ChunkSink, Transport};
use crate::retry::AttemptError;
use std::io;
use std::time::Duration;

/// Transfer limits applied to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Safety net so a completely stuck transfer eventually fails.
    pub timeout: Duration,
    /// Abort if throughput stays below `low_speed_limit` bytes/sec for `low_speed_time`.
    pub low_speed_limit: u32,
    pub low_speed_time: Duration,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: Duration::from_secs(3600),
            low_speed_limit: 1024,
            low_speed_time: Duration::from_secs(60),
            max_redirections: 10,
            user_agent: None,
        }
    }
}

/// Plain GET over libcurl, following redirects.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    options: HttpOptions,
}

impl CurlTransport {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HttpOptions {
        &self.options
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        let o = &self.options;
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(o.max_redirections)?;
        // 4xx/5xx bodies are never handed to the sink.
        easy.fail_on_error(true)?;
        easy.connect_timeout(o.connect_timeout)?;
        easy.low_speed_limit(o.low_speed_limit)?;
        easy.low_speed_time(o.low_speed_time)?;
        easy.timeout(o.timeout)?;
        if let Some(ua) = &o.user_agent {
            easy.useragent(ua)?;
        }
        Ok(())
    }
}

/// Status codes only mean something for HTTP(S); file:// reports 0.
fn has_http_status(url: &str) -> bool {
    url::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(true)
}

impl Transport for CurlTransport {
    fn fetch(&self, url: &str, sink: &mut ChunkSink<'_>) -> Result<(), AttemptError> {
        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, url).map_err(AttemptError::Curl)?;

        let mut sink_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match sink(data) {
                    Ok(()) => Ok(data.len()),
                    Err(e) => {
                        sink_error = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(AttemptError::Curl)?;
            transfer.perform()
        };

        if let Err(e) = performed {
            if e.is_write_error() {
                if let Some(io_err) = sink_error.take() {
                    return Err(AttemptError::Write(io_err));
                }
            }
            if e.is_http_returned_error() {
                let code = easy.response_code().map_err(AttemptError::Curl)?;
                return Err(AttemptError::Http(code));
            }
            return Err(AttemptError::Curl(e));
        }

        if has_http_status(url) {
            let code = easy.response_code().map_err(AttemptError::Curl)?;
            if !(200..300).contains(&code) {
                return Err(AttemptError::Http(code));
            }
        }
        Ok(())
    }
}
