//! Classify attempt failures into coarse kinds for logging and reporting.

use super::error::AttemptError;
use super::policy::ErrorKind;

/// Classify an HTTP status code.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        _ => ErrorKind::Http(code),
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_partial_file()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify an attempt error into an ErrorKind.
pub fn classify(e: &AttemptError) -> ErrorKind {
    match e {
        AttemptError::Curl(ce) => classify_curl_error(ce),
        AttemptError::Http(code) => classify_http_status(*code),
        AttemptError::Stream(_) => ErrorKind::Connection,
        AttemptError::Write(_) => ErrorKind::Storage,
        AttemptError::DigestMismatch { .. } => ErrorKind::Integrity,
    }
}
