//! Fixed-size batching

use super::types::{Batch, BatchId};
use crate::core::models::Participant;
use crate::utils::error::{Result, UploadError};
use std::iter::{Enumerate, FusedIterator};
use std::num::NonZeroUsize;
use std::slice::Chunks;

/// Splits participants into batches of at most `batch_size` records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batcher {
    batch_size: NonZeroUsize,
}

impl Batcher {
    /// Create a batcher; a zero batch size is rejected
    pub fn new(batch_size: usize) -> Result<Self> {
        NonZeroUsize::new(batch_size)
            .map(|batch_size| Self { batch_size })
            .ok_or_else(|| {
                UploadError::invalid_configuration("Batch size must be a positive integer")
            })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.get()
    }

    /// Number of batches `total` records produce
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size.get())
    }

    /// Lazily split `participants` into batches numbered from 1
    pub fn batches<'a>(
        &self,
        participants: &'a [Participant],
        prefix: &'a str,
        source: &'a str,
    ) -> Batches<'a> {
        Batches {
            chunks: participants.chunks(self.batch_size.get()).enumerate(),
            prefix,
            source,
        }
    }
}

/// Iterator over the batches of a dataset
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    chunks: Enumerate<Chunks<'a, Participant>>,
    prefix: &'a str,
    source: &'a str,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, participants) = self.chunks.next()?;
        Some(Batch {
            id: BatchId::new(self.prefix, index + 1),
            source: self.source,
            participants,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
