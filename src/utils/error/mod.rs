//! Error handling for the upload client
//!
//! This module defines the error taxonomy shared by the batcher, the sender
//! and the binaries.

mod helpers;
mod types;

pub use types::{Result, UploadError};
