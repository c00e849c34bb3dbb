//! Test fixtures and data factories
//!
//! All factories create real objects through the public API, not mocks.

use async_trait::async_trait;
use participant_upload::core::generator::generate_participants;
use participant_upload::core::retry::Sleeper;
use participant_upload::{GeneratorConfig, Participant, RetryConfig, SenderConfig};
use std::sync::Mutex;
use std::time::Duration;

/// Factory for participant datasets
pub struct ParticipantFactory;

impl ParticipantFactory {
    /// `count` participants, none of which has a match key yet
    pub fn unmatched(count: usize) -> Vec<Participant> {
        Self::with_ratio(count, 0.0)
    }

    /// `count` participants where roughly `ratio` of them have a match key
    pub fn with_ratio(count: usize, ratio: f64) -> Vec<Participant> {
        let config = GeneratorConfig {
            count,
            event: "event-test".to_string(),
            match_key_ratio: ratio,
            seed: 42,
            ..GeneratorConfig::default()
        };
        generate_participants(&config).expect("valid generator config")
    }
}

/// Sender configuration aimed at `endpoint` with a one-second request timeout
pub fn sender_config(endpoint: &str, batch_size: usize) -> SenderConfig {
    SenderConfig {
        endpoint: endpoint.to_string(),
        input: "participants.json".into(),
        batch_size,
        source: "upstream-test".to_string(),
        batch_prefix: "run".to_string(),
        promote_seed: Some(7),
        retry: RetryConfig {
            max_retries: 3,
            backoff_base: 1.5,
            request_timeout_secs: 1,
        },
        ..SenderConfig::default()
    }
}

/// Sleeper that records requested delays and returns immediately
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, delay: Duration) {
        self.delays.lock().unwrap().push(delay);
    }
}
