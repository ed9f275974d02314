//! Fixed-delay retry combinator.

use std::future::Future;
use std::time::Duration;

use crate::domain::resolution::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY};

/// Attempt budget and the pause between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` below 1 is raised to 1.
    #[must_use]
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

/// Calls `op` until it yields `Some` or the attempt budget runs out.
///
/// `op` receives the 1-based attempt number. The delay is slept between
/// attempts only, never after the last one.
pub async fn with_retry<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Option<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Option<T>>,
{
    for attempt in 1..=policy.max_attempts {
        if let Some(value) = op(attempt).await {
            return Some(value);
        }
        if attempt < policy.max_attempts {
            tracing::debug!(attempt, max = policy.max_attempts, "retrying after {:?}", policy.delay);
            tokio::time::sleep(policy.delay).await;
        }
    }
    None
}
