//! Command-line surface for the two binaries
//!
//! Flags override values from an optional YAML config file; every flag can
//! also come from an `UPLOAD_*` environment variable.

use crate::config::{GeneratorConfig, SenderConfig, Validate};
use crate::utils::error::Result;
use crate::utils::logging::LogFormat;
use clap::Parser;
use std::path::PathBuf;

/// Read participants JSON and send it to the registration API in batches
#[derive(Parser, Debug)]
#[command(name = "send-batches")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct SendArgs {
    /// POST endpoint, e.g. http://localhost:8080/appointments/participants
    #[arg(long, env = "UPLOAD_API")]
    pub api: Option<String>,

    /// Participant dataset (JSON array)
    #[arg(long, env = "UPLOAD_INFILE")]
    pub infile: Option<PathBuf>,

    /// Records per batch
    #[arg(long, env = "UPLOAD_BATCH_SIZE")]
    pub batch_size: Option<usize>,

    /// Source label sent with every batch
    #[arg(long, env = "UPLOAD_SOURCE")]
    pub source: Option<String>,

    /// Batch id prefix; ids look like <prefix>-001
    #[arg(long, env = "UPLOAD_BATCH_PREFIX")]
    pub batch_prefix: Option<String>,

    /// Simulate assigning MIDs to this many previously-no-MID participants
    #[arg(long, env = "UPLOAD_PROMOTE_MIDS")]
    pub promote_mids: Option<usize>,

    /// Seed for choosing which participants get promoted
    #[arg(long, env = "UPLOAD_PROMOTE_SEED")]
    pub promote_seed: Option<u64>,

    /// Retries on timeouts and connection failures
    #[arg(long, env = "UPLOAD_RETRIES")]
    pub retries: Option<u32>,

    /// Exponential backoff base, in seconds
    #[arg(long, env = "UPLOAD_BACKOFF")]
    pub backoff: Option<f64>,

    /// Per-request timeout, in seconds
    #[arg(long, env = "UPLOAD_TIMEOUT")]
    pub timeout: Option<u64>,

    /// YAML file with sender settings; flags take precedence
    #[arg(short, long, env = "UPLOAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "UPLOAD_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl SendArgs {
    /// Resolve the final, validated sender configuration
    pub async fn into_config(self) -> Result<SenderConfig> {
        let base = match &self.config {
            Some(path) => SenderConfig::from_file(path).await?,
            None => SenderConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    fn apply(self, mut config: SenderConfig) -> SenderConfig {
        if let Some(api) = self.api {
            config.endpoint = api;
        }
        if let Some(infile) = self.infile {
            config.input = infile;
        }
        if let Some(batch_size) = self.batch_size {
            config.batch_size = batch_size;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(batch_prefix) = self.batch_prefix {
            config.batch_prefix = batch_prefix;
        }
        if let Some(promote_mids) = self.promote_mids {
            config.promote_count = promote_mids;
        }
        if self.promote_seed.is_some() {
            config.promote_seed = self.promote_seed;
        }
        if let Some(retries) = self.retries {
            config.retry.max_retries = retries;
        }
        if let Some(backoff) = self.backoff {
            config.retry.backoff_base = backoff;
        }
        if let Some(timeout) = self.timeout {
            config.retry.request_timeout_secs = timeout;
        }
        config
    }
}

/// Generate a JSON file of fake participants
#[derive(Parser, Debug)]
#[command(name = "generate-participants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct GenerateArgs {
    /// Number of participants [default: 500]
    #[arg(long)]
    pub count: Option<usize>,

    /// Output path [default: data/participants_seed.json]
    #[arg(long)]
    pub outfile: Option<PathBuf>,

    /// Event id written into each record's metadata [default: event-1001]
    #[arg(long)]
    pub event: Option<String>,

    /// Fraction [0..1] that have a MID on day 1 [default: 0.7]
    #[arg(long)]
    pub mid_ratio: Option<f64>,

    /// Random seed [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML file with generator settings; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl GenerateArgs {
    /// Resolve the final, validated generator configuration
    pub async fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path).await?,
            None => GeneratorConfig::default(),
        };
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(outfile) = self.outfile {
            config.outfile = outfile;
        }
        if let Some(event) = self.event {
            config.event = event;
        }
        if let Some(mid_ratio) = self.mid_ratio {
            config.match_key_ratio = mid_ratio;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }
}
