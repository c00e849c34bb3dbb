//! Run-level outcome totals
//!
//! The registration API does not report per-record results, so a batch's
//! records are all attributed to whatever its response status says. The
//! created and updated figures are therefore approximations.

use crate::core::sender::{BatchOutcome, BatchStatus};
use serde::Serialize;
use std::fmt;

/// Accumulates batch outcomes in the order they are produced
#[derive(Debug, Clone, Default)]
pub struct OutcomeAggregator {
    batches: usize,
    created: usize,
    updated_or_unchanged: usize,
    failed: usize,
    retries: u32,
    failed_batches: Vec<String>,
}

impl OutcomeAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one terminal batch outcome to the totals
    pub fn record(&mut self, outcome: &BatchOutcome) {
        self.batches += 1;
        self.retries += outcome.retries();
        match &outcome.status {
            BatchStatus::Created => self.created += outcome.records,
            BatchStatus::UpdatedOrUnchanged => self.updated_or_unchanged += outcome.records,
            BatchStatus::Failed(_) => {
                self.failed += outcome.records;
                self.failed_batches.push(outcome.batch_id.to_string());
            }
        }
    }

    /// Records accounted for so far
    pub fn total(&self) -> usize {
        self.created + self.updated_or_unchanged + self.failed
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            batches: self.batches,
            records: self.total(),
            approx_created: self.created,
            approx_updated_or_unchanged: self.updated_or_unchanged,
            failed: self.failed,
            retries: self.retries,
            failed_batches: self.failed_batches.clone(),
            promoted: 0,
        }
    }
}

/// Final report of an upload run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub batches: usize,
    pub records: usize,
    /// Records in batches answered with `201`
    pub approx_created: usize,
    /// Records in batches answered with `204`
    pub approx_updated_or_unchanged: usize,
    pub failed: usize,
    pub retries: u32,
    pub failed_batches: Vec<String>,
    /// Records given a match key before sending
    pub promoted: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- summary ---")?;
        writeln!(f, "batches: {}", self.batches)?;
        if self.promoted > 0 {
            writeln!(f, "promoted: {}", self.promoted)?;
        }
        writeln!(f, "approx created (201 batches): {}", self.approx_created)?;
        writeln!(
            f,
            "approx updated/no-change (204 batches): {}",
            self.approx_updated_or_unchanged
        )?;
        write!(f, "failed: {}", self.failed)?;
        if !self.failed_batches.is_empty() {
            write!(f, " (batches: {})", self.failed_batches.join(", "))?;
        }
        writeln!(f)?;
        write!(
            f,
            "note: created/updated totals attribute each batch's records to its response status"
        )
    }
}
