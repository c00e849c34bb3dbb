//! # participant-upload
//!
//! Batch upload client for a participant registration API, plus a generator
//! for fake participant datasets to feed it.
//!
//! The client splits a dataset into fixed-size batches, POSTs them one at a
//! time, retries transport faults with exponential backoff, and tallies how
//! many records landed in created, updated-or-unchanged and failed batches.
//! It can also simulate a "day two" promotion, where participants without a
//! match key are issued one while their participant id changes to a new
//! temporary value, so the API has to reconcile them by name and email.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use participant_upload::{SenderConfig, UploadRunner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SenderConfig {
//!         endpoint: "http://localhost:8080/appointments/participants".to_string(),
//!         input: "data/participants_seed.json".into(),
//!         batch_size: 200,
//!         ..SenderConfig::default()
//!     };
//!     let summary = UploadRunner::from_config(config)?.run_from_input().await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::{GeneratorConfig, RetryConfig, SenderConfig};
pub use crate::core::aggregator::{OutcomeAggregator, RunSummary};
pub use crate::core::batch::{Batch, BatchId, BatchRequest, Batcher};
pub use crate::core::models::{AttendanceStatus, Participant};
pub use crate::core::promotion::promote_match_keys;
pub use crate::core::runner::UploadRunner;
pub use crate::core::sender::{BatchOutcome, BatchSender, BatchStatus, FailureReason};
pub use crate::core::transport::{HttpTransport, Transport, TransportResponse};
pub use utils::error::{Result, UploadError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
