//! Batch ingestion core
//!
//! Loading, promotion simulation, batching, sending with retry, and the
//! run-level tallies. [`runner::UploadRunner`] ties them together.

pub mod aggregator;
pub mod batch;
pub mod generator;
pub mod models;
pub mod promotion;
pub mod retry;
pub mod runner;
pub mod sender;
pub mod source;
pub mod transport;
