//! Batch sender with retry
//!
//! Each batch walks a small state machine:
//!
//! ```text
//! Pending -> Sending(1) -> [Backoff(k) -> Sending(k+1)]* -> Done
//! ```
//!
//! `Done` carries the terminal status (created, updated-or-unchanged, or
//! failed) and is reached exactly once. Only transport faults loop back
//! through `Backoff`; any definite response ends the batch.

use crate::core::batch::{Batch, BatchId, BatchRequest};
use crate::core::retry::{RetryPolicy, Sleeper};
use crate::core::transport::{ResponseClass, Transport};
use crate::utils::error::UploadError;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Longest slice of a response body kept for diagnostics
const MAX_BODY_CHARS: usize = 500;

/// Why a batch failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The endpoint answered with a non-success status
    DefiniteRemote { status: u16, body: String },
    /// Every attempt hit a transport fault
    RetriesExhausted { last_error: String },
    /// The request could not be issued at all
    Rejected { error: String },
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::DefiniteRemote { status, body } => {
                write!(f, "status={} body={}", status, body)
            }
            FailureReason::RetriesExhausted { last_error } => {
                write!(f, "failed after retries: {}", last_error)
            }
            FailureReason::Rejected { error } => write!(f, "{}", error),
        }
    }
}

/// Terminal status of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchStatus {
    /// `201`: every record is counted as created
    Created,
    /// `204`: every record is counted as updated or unchanged
    UpdatedOrUnchanged,
    Failed(FailureReason),
}

/// Where a batch is in its lifecycle
#[derive(Debug, Clone, PartialEq)]
pub enum BatchState {
    Pending,
    Sending { attempt: u32 },
    Backoff { attempt: u32, delay: Duration },
    Done { status: BatchStatus, attempts: u32 },
}

/// Result of sending one batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub batch_id: BatchId,
    /// Records in the batch; the whole batch is attributed to `status`
    pub records: usize,
    pub attempts: u32,
    pub status: BatchStatus,
}

impl BatchOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, BatchStatus::Failed(_))
    }

    /// Retries performed, not counting the first attempt
    pub fn retries(&self) -> u32 {
        self.attempts.saturating_sub(1)
    }

    /// The failure as an error value, for callers that report errors
    pub fn to_error(&self) -> Option<UploadError> {
        match &self.status {
            BatchStatus::Failed(reason) => Some(UploadError::batch_failed(
                self.batch_id.to_string(),
                reason.to_string(),
            )),
            _ => None,
        }
    }
}

/// Sends batches one at a time, retrying transport faults
pub struct BatchSender<T, S> {
    transport: T,
    sleeper: S,
    policy: RetryPolicy,
}

impl<T: Transport, S: Sleeper> BatchSender<T, S> {
    pub fn new(transport: T, sleeper: S, policy: RetryPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Send `batch` to `endpoint` and drive it to a terminal status
    pub async fn send_batch(&self, endpoint: &str, batch: &Batch<'_>) -> BatchOutcome {
        let request = batch.request();
        let mut state = BatchState::Pending;

        loop {
            state = match state {
                BatchState::Pending => BatchState::Sending { attempt: 1 },
                BatchState::Sending { attempt } => self.attempt(endpoint, &request, attempt).await,
                BatchState::Backoff { attempt, delay } => {
                    self.sleeper.sleep(delay).await;
                    BatchState::Sending {
                        attempt: attempt.saturating_add(1),
                    }
                }
                BatchState::Done { status, attempts } => {
                    return BatchOutcome {
                        batch_id: batch.id.clone(),
                        records: batch.len(),
                        attempts,
                        status,
                    };
                }
            };
            debug!(batch_id = %batch.id, ?state, "Batch state transition");
        }
    }

    async fn attempt(&self, endpoint: &str, request: &BatchRequest<'_>, attempt: u32) -> BatchState {
        let batch_id = &request.batch_id;

        match self.transport.post_batch(endpoint, request).await {
            Ok(response) => {
                let status = match ResponseClass::from_status(response.status) {
                    ResponseClass::Created => {
                        info!("[batch {}] -> 201 Created", batch_id);
                        BatchStatus::Created
                    }
                    ResponseClass::NoContent => {
                        info!("[batch {}] -> 204 No Content", batch_id);
                        BatchStatus::UpdatedOrUnchanged
                    }
                    ResponseClass::Error => {
                        let body = truncate_body(&response.body);
                        let remote = UploadError::definite_remote(response.status, body.clone());
                        error!("[batch {}] {}", batch_id, remote);
                        BatchStatus::Failed(FailureReason::DefiniteRemote {
                            status: response.status,
                            body,
                        })
                    }
                };
                BatchState::Done {
                    status,
                    attempts: attempt,
                }
            }
            Err(e) if e.is_retryable() => {
                if self.policy.should_retry(attempt) {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        "[batch {}] transient error: {} -> retrying in {:.1}s",
                        batch_id,
                        e,
                        delay.as_secs_f64()
                    );
                    BatchState::Backoff { attempt, delay }
                } else {
                    error!("[batch {}] FAILED after retries: {}", batch_id, e);
                    BatchState::Done {
                        status: BatchStatus::Failed(FailureReason::RetriesExhausted {
                            last_error: e.to_string(),
                        }),
                        attempts: attempt,
                    }
                }
            }
            Err(e) => {
                error!("[batch {}] FAILED: {}", batch_id, e);
                BatchState::Done {
                    status: BatchStatus::Failed(FailureReason::Rejected {
                        error: e.to_string(),
                    }),
                    attempts: attempt,
                }
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_BODY_CHARS).collect()
}
