//! Upload run orchestration
//!
//! Source -> promotion (optional) -> batcher -> sender -> aggregator, one
//! batch at a time. A failed batch is recorded and the run moves on; only
//! configuration problems found before the first request abort it.

use crate::config::{SenderConfig, Validate};
use crate::core::aggregator::{OutcomeAggregator, RunSummary};
use crate::core::batch::Batcher;
use crate::core::models::Participant;
use crate::core::promotion::promote_match_keys;
use crate::core::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::core::sender::BatchSender;
use crate::core::source::load_participants;
use crate::core::transport::{HttpTransport, Transport};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Drives a whole upload run
pub struct UploadRunner<T, S> {
    config: SenderConfig,
    sender: BatchSender<T, S>,
}

impl UploadRunner<HttpTransport, TokioSleeper> {
    /// Runner that talks HTTP and really sleeps between attempts
    pub fn from_config(config: SenderConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config.retry.request_timeout())?;
        Self::new(config, transport, TokioSleeper)
    }
}

impl<T: Transport, S: Sleeper> UploadRunner<T, S> {
    pub fn new(config: SenderConfig, transport: T, sleeper: S) -> Result<Self> {
        config.validate()?;
        let policy = RetryPolicy::new(&config.retry);
        Ok(Self {
            config,
            sender: BatchSender::new(transport, sleeper, policy),
        })
    }

    pub fn config(&self) -> &SenderConfig {
        &self.config
    }

    pub fn sender(&self) -> &BatchSender<T, S> {
        &self.sender
    }

    /// Load the configured input file and run it
    pub async fn run_from_input(&self) -> Result<RunSummary> {
        let participants = load_participants(&self.config.input).await?;
        self.run(participants).await
    }

    /// Run with promotion randomness seeded from config, or from entropy
    pub async fn run(&self, participants: Vec<Participant>) -> Result<RunSummary> {
        let mut rng = match self.config.promote_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(participants, &mut rng).await
    }

    /// Promote, batch and send `participants`, drawing promotions from `rng`
    pub async fn run_with_rng<R: Rng + ?Sized>(
        &self,
        mut participants: Vec<Participant>,
        rng: &mut R,
    ) -> Result<RunSummary> {
        let batcher = Batcher::new(self.config.batch_size)?;

        let promoted = if self.config.promote_count > 0 {
            let promoted = promote_match_keys(&mut participants, self.config.promote_count, rng);
            info!("Simulated MID promotion on {} participants", promoted);
            promoted
        } else {
            0
        };

        info!(
            "Sending {} participants in {} batch(es) of up to {}...",
            participants.len(),
            batcher.batch_count(participants.len()),
            batcher.batch_size()
        );

        debug!(
            max_attempts = self.sender.policy().max_attempts(),
            "Retry policy per batch"
        );

        let mut aggregator = OutcomeAggregator::new();
        for batch in batcher.batches(
            &participants,
            &self.config.batch_prefix,
            &self.config.source,
        ) {
            let outcome = self.sender.send_batch(&self.config.endpoint, &batch).await;
            if let Some(error) = outcome.to_error() {
                warn!("{}; continuing with the next batch", error);
            }
            aggregator.record(&outcome);
        }

        let summary = RunSummary {
            promoted,
            ..aggregator.summary()
        };
        if summary.has_failures() {
            warn!(
                batches = summary.batches,
                failed = summary.failed,
                failed_batches = ?summary.failed_batches,
                "Upload run finished with failed batches"
            );
        } else {
            info!(
                batches = summary.batches,
                created = summary.approx_created,
                updated_or_unchanged = summary.approx_updated_or_unchanged,
                "Upload run finished"
            );
        }
        Ok(summary)
    }
}
