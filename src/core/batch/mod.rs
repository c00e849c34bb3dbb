//! Partitioning of the participant sequence into transmission batches
//!
//! Batches borrow contiguous slices of the dataset; they are never split or
//! merged once created, and they come out in dataset order.

mod batcher;
mod types;

pub use batcher::{Batcher, Batches};
pub use types::{Batch, BatchId, BatchRequest};
