//! Retry and backoff policy.
//!
//! Every attempt failure is retryable while the request has budget left.
//! Classification only feeds log fields and the final error class; the
//! policy decides the delay between sequential attempts.

mod classify;
mod error;
mod policy;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::AttemptError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
