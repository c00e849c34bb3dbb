//! HTTP transport for batch uploads
//!
//! One batch is one POST. The transport only reports what happened on the
//! wire; deciding whether to retry is left to the sender.

use crate::core::batch::BatchRequest;
use crate::utils::error::{Result, UploadError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("participant-upload/", env!("CARGO_PKG_VERSION"));

/// Status and body of a definite response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// How a definite response is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// `201 Created`
    Created,
    /// `204 No Content`
    NoContent,
    /// Anything else; never retried
    Error,
}

impl ResponseClass {
    pub fn from_status(status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Ok(code) if code == StatusCode::CREATED => ResponseClass::Created,
            Ok(code) if code == StatusCode::NO_CONTENT => ResponseClass::NoContent,
            _ => ResponseClass::Error,
        }
    }
}

/// Sends a single upload request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns the response for any definite answer, whatever its status.
    /// Timeouts and connection faults come back as
    /// [`UploadError::TransientTransport`].
    async fn post_batch(
        &self,
        endpoint: &str,
        request: &BatchRequest<'_>,
    ) -> Result<TransportResponse>;
}

/// reqwest-backed transport with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(timeout)
            .tcp_nodelay(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                UploadError::invalid_configuration(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_batch(
        &self,
        endpoint: &str,
        request: &BatchRequest<'_>,
    ) -> Result<TransportResponse> {
        debug!(batch_id = %request.batch_id, endpoint, "Posting batch");

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Ok(TransportResponse { status, body })
    }
}

fn classify_send_error(error: reqwest::Error) -> UploadError {
    if error.is_builder() {
        UploadError::invalid_configuration(format!("Invalid request: {}", error))
    } else if error.is_timeout() {
        UploadError::transient(format!("request timed out: {}", error))
    } else {
        UploadError::transient(error.to_string())
    }
}
