//! Retry with exponential backoff
//!
//! A batch that fails at the transport level is retried; attempt `k`
//! (1-indexed) waits `backoff_base^(k-1)` seconds before attempt `k+1`.
//! After `max_retries` retries the batch gives up.

use crate::config::RetryConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Backoff schedule for one batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff_base: f64,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff_base: config.backoff_base,
        }
    }

    /// Total attempts a persistently failing batch receives
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Whether a transient failure on `attempt` earns another attempt
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt <= self.max_retries
    }

    /// Delay to wait after transient failure of `attempt` (1-indexed)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let secs = self.backoff_base.powi(exponent);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// Suspends the current batch between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, delay: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}
