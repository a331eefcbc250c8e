use std::time::Duration;

/// High-level classification of an attempt failure.
///
/// Only used for diagnostics: every attempt failure is retried while the
/// request still has budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read/low-speed).
    Timeout,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// Network-level failure (connection reset, DNS, truncated body, etc.).
    Connection,
    /// Any other non-2xx status.
    Http(u32),
    /// Body digest did not match the expected value.
    Integrity,
    /// Local write failed mid-stream.
    Storage,
    /// Anything curl reports that fits none of the above.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry; surface the last error.
    NoRetry,
    /// Retry after the given delay (possibly zero).
    RetryAfter(Duration),
}

/// Backoff between sequential attempts. The attempt budget itself lives on
/// the request (`retries`), so the same policy serves every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Base delay for backoff; zero retries immediately.
    pub base_delay: Duration,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::immediate()
    }
}

impl RetryPolicy {
    /// Retry straight away with no delay.
    pub fn immediate() -> Self {
        Self {
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }

    pub fn exponential(base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            base_delay,
            max_delay,
        }
    }

    /// Decide what to do after attempt number `attempt` (1-based) failed while
    /// `retries_remaining` retries were still available for it.
    pub fn decide(&self, attempt: u32, retries_remaining: u32) -> RetryDecision {
        if retries_remaining == 0 {
            return RetryDecision::NoRetry;
        }
        // base * 2^(attempt-1), capped.
        let exp = 1u32 << attempt.saturating_sub(1).min(8);
        let raw = self.base_delay.saturating_mul(exp);
        RetryDecision::RetryAfter(raw.min(self.max_delay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_retry_without_budget() {
        let p = RetryPolicy::default();
        assert_eq!(p.decide(1, 0), RetryDecision::NoRetry);
        assert_eq!(p.decide(7, 0), RetryDecision::NoRetry);
    }

    #[test]
    fn immediate_policy_has_zero_delay() {
        let p = RetryPolicy::immediate();
        assert_eq!(p.decide(1, 3), RetryDecision::RetryAfter(Duration::ZERO));
        assert_eq!(p.decide(3, 1), RetryDecision::RetryAfter(Duration::ZERO));
    }

    #[test]
    fn exponential_backoff_grows_and_is_capped() {
        let p = RetryPolicy::exponential(Duration::from_millis(250), Duration::from_secs(2));
        let delay = |attempt| match p.decide(attempt, 10) {
            RetryDecision::RetryAfter(d) => d,
            RetryDecision::NoRetry => panic!("expected retry"),
        };
        assert_eq!(delay(1), Duration::from_millis(250));
        assert_eq!(delay(2), Duration::from_millis(500));
        assert_eq!(delay(3), Duration::from_secs(1));
        assert_eq!(delay(10), Duration::from_secs(2));
    }
}
