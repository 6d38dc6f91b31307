//! Bounded exponential backoff for throttled inference calls.
//!
//! Only errors the caller classifies as throttling are retried. Everything
//! else fails on the first attempt.

use std::future::Future;
use std::time::Duration;

/// Base delay before the first retry.
const BASE_RETRY_DELAY: Duration = Duration::from_secs(1);

/// No single wait is longer than this.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first one (0 = single attempt).
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    pub fn throttling(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: BASE_RETRY_DELAY,
            max_delay: MAX_RETRY_DELAY,
        }
    }

    /// Wait before retry number `retry` (0-based): base, 2x base, 4x base, ...
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Run `op` until it succeeds, fails with a non-throttling error, or the
/// policy's retries are used up.
pub async fn retry_throttled<T, E, F, Fut>(
    policy: RetryPolicy,
    is_throttling: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    E: std::fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut retry = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if is_throttling(&err) && retry < policy.max_retries => {
                let delay = policy.delay_for(retry);
                tracing::warn!(
                    attempt = retry + 1,
                    max_retries = policy.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Inference throttled, backing off"
                );
                tokio::time::sleep(delay).await;
                retry += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
