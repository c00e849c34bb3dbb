//! Common test utilities
//!
//! - Dataset factories backed by the real generator
//! - Sender configuration pointing at a mock endpoint
//! - A sleeper that records backoff delays instead of waiting

pub mod fixtures;

pub use fixtures::{ParticipantFactory, RecordingSleeper, sender_config};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
