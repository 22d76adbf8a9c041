//! Retry controller for rate-limited requests.
//!
//! Only 429 responses are retried. The wait between attempts is the delay the
//! server supplied in `x-ratelimit-period`; there is no exponential growth or
//! jitter because the server already tells us when the window reopens.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::time::sleep;

use crate::Error;

/// Default number of attempts, including the first.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// How many times a rate-limited request is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Atomic counters tracking request outcomes across all calls on a client.
#[derive(Debug, Default)]
pub struct RequestTracker {
    requests_made: AtomicU64,
    requests_succeeded: AtomicU64,
    requests_rate_limited: AtomicU64,
    requests_failed: AtomicU64,
    /// Cumulative backoff time in milliseconds.
    total_backoff_ms: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self) {
        self.requests_made.fetch_add(1, Ordering::Relaxed);
        self.requests_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rate_limited(&self) {
        self.requests_made.fetch_add(1, Ordering::Relaxed);
        self.requests_rate_limited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.requests_made.fetch_add(1, Ordering::Relaxed);
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_backoff(&self, duration: Duration) {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        // saturates; the closure never returns None
        let _ = self
            .total_backoff_ms
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |total| {
                Some(total.saturating_add(ms))
            });
    }

    /// Snapshot the current counters.
    pub fn summary(&self) -> TrackerSummary {
        TrackerSummary {
            requests_made: self.requests_made.load(Ordering::Relaxed),
            requests_succeeded: self.requests_succeeded.load(Ordering::Relaxed),
            requests_rate_limited: self.requests_rate_limited.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            total_backoff_secs: self.total_backoff_ms.load(Ordering::Relaxed) as f64 / 1000.0,
        }
    }
}

/// Immutable snapshot of tracker counters for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSummary {
    pub requests_made: u64,
    pub requests_succeeded: u64,
    pub requests_rate_limited: u64,
    pub requests_failed: u64,
    pub total_backoff_secs: f64,
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the policy's attempts are used up.
///
/// - `Ok` returns immediately.
/// - `Error::RateLimited` sleeps for its `retry_after` and tries again, unless
///   it was the last attempt, in which case `Error::AttemptsExceeded` is
///   returned instead of the rate-limit error.
/// - Any other error returns immediately.
///
/// With `max_attempts == 0` the operation never runs and the result is
/// `Error::AttemptsExceeded`.
pub async fn with_retry<F, Fut, T>(
    policy: &RetryPolicy,
    tracker: &RequestTracker,
    label: &str,
    mut operation: F,
) -> Result<T, Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    let max_attempts = policy.max_attempts;

    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(value) => {
                tracker.record_success();
                return Ok(value);
            }
            Err(Error::RateLimited { retry_after, .. }) => {
                tracker.record_rate_limited();

                if attempt == max_attempts {
                    tracing::error!(
                        "{} still rate limited after {} attempts, giving up",
                        label,
                        max_attempts
                    );
                    return Err(Error::AttemptsExceeded {
                        attempts: max_attempts,
                    });
                }

                tracing::warn!(
                    "{} rate limited (attempt {}/{}), retrying in {:.1}s",
                    label,
                    attempt,
                    max_attempts,
                    retry_after.as_secs_f64()
                );
                tracker.record_backoff(retry_after);
                sleep(retry_after).await;
            }
            Err(e) => {
                tracker.record_failure();
                return Err(e);
            }
        }
    }

    Err(Error::AttemptsExceeded {
        attempts: max_attempts,
    })
}
