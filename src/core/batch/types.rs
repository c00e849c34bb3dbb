//! Batch types

use crate::core::models::Participant;
use serde::Serialize;
use std::fmt;

/// Identifier of a batch within a run: `<prefix>-<NNN>`, 1-indexed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchId {
    prefix: String,
    sequence: usize,
}

impl BatchId {
    pub fn new(prefix: impl Into<String>, sequence: usize) -> Self {
        Self {
            prefix: prefix.into(),
            sequence,
        }
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.prefix, self.sequence)
    }
}

impl Serialize for BatchId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A contiguous, ordered slice of participants sent as one request
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<'a> {
    pub id: BatchId,
    pub source: &'a str,
    pub participants: &'a [Participant],
}

impl<'a> Batch<'a> {
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Request body for this batch
    pub fn request(&self) -> BatchRequest<'a> {
        BatchRequest {
            batch_id: self.id.clone(),
            source: self.source,
            participants: self.participants,
        }
    }
}

/// Upload request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest<'a> {
    pub batch_id: BatchId,
    pub source: &'a str,
    pub participants: &'a [Participant],
}
