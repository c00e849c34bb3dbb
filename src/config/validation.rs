//! Configuration validation

use super::models::*;
use crate::utils::error::{Result, UploadError};
use tracing::debug;
use url::Url;

/// Upper bound on retries per batch
pub const MAX_RETRIES: u32 = 100;

/// Check a configuration before anything is sent or written
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Endpoint must be an absolute http(s) URL with a host
fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.trim().is_empty() {
        return Err(UploadError::invalid_configuration("endpoint is required"));
    }

    let url = Url::parse(endpoint).map_err(|e| {
        UploadError::invalid_configuration(format!("endpoint has invalid URL format: {}", e))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(UploadError::invalid_configuration(format!(
                "endpoint must use http:// or https:// scheme, got: {}",
                scheme
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(UploadError::invalid_configuration(
            "endpoint URL must have a valid host",
        ));
    }
    Ok(())
}

impl Validate for RetryConfig {
    fn validate(&self) -> Result<()> {
        if !self.backoff_base.is_finite() || self.backoff_base < 1.0 {
            return Err(UploadError::invalid_configuration(format!(
                "backoff base must be a finite number >= 1, got: {}",
                self.backoff_base
            )));
        }
        if self.max_retries > MAX_RETRIES {
            return Err(UploadError::invalid_configuration(format!(
                "max retries must be at most {}, got: {}",
                MAX_RETRIES, self.max_retries
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(UploadError::invalid_configuration(
                "request timeout must be positive",
            ));
        }
        Ok(())
    }
}

impl Validate for SenderConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating sender configuration");

        validate_endpoint(&self.endpoint)?;
        if self.input.as_os_str().is_empty() {
            return Err(UploadError::invalid_configuration("input file is required"));
        }
        if self.batch_size == 0 {
            return Err(UploadError::invalid_configuration(
                "Batch size must be a positive integer",
            ));
        }
        self.retry.validate()
    }
}

impl Validate for GeneratorConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating generator configuration");

        if !(0.0..=1.0).contains(&self.match_key_ratio) {
            return Err(UploadError::invalid_configuration(format!(
                "match key ratio must be within [0, 1], got: {}",
                self.match_key_ratio
            )));
        }
        if self.outfile.as_os_str().is_empty() {
            return Err(UploadError::invalid_configuration("output file is required"));
        }
        Ok(())
    }
}
