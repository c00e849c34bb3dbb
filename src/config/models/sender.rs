//! Sender configuration

use super::super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one upload run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderConfig {
    /// POST endpoint, e.g. `http://localhost:8080/appointments/participants`
    #[serde(default)]
    pub endpoint: String,
    /// Participant dataset (JSON array)
    #[serde(default)]
    pub input: PathBuf,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Source label sent with every batch
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_batch_prefix")]
    pub batch_prefix: String,
    /// Records to promote to a match key before sending
    #[serde(default)]
    pub promote_count: usize,
    /// Seed for the promotion sample; random when unset
    #[serde(default)]
    pub promote_seed: Option<u64>,
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            input: PathBuf::new(),
            batch_size: default_batch_size(),
            source: default_source(),
            batch_prefix: default_batch_prefix(),
            promote_count: 0,
            promote_seed: None,
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt, transport faults only
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Attempt `k` waits `backoff_base^(k-1)` seconds
    #[serde(default = "default_backoff_base")]
    pub backoff_base: f64,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub request_timeout_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff_base: default_backoff_base(),
            request_timeout_secs: default_timeout_seconds(),
        }
    }
}

impl RetryConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
