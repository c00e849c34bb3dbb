//! Error types for the upload client

use thiserror::Error;

/// Result type alias for the upload client
pub type Result<T> = std::result::Result<T, UploadError>;

/// Main error type for the upload client
#[derive(Error, Debug)]
pub enum UploadError {
    /// Bad settings or malformed input, detected before any request is sent
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Timeout or connection fault; eligible for retry
    #[error("Transient transport error: {0}")]
    TransientTransport(String),

    /// The endpoint answered with a status outside the two success classes
    #[error("Remote error: status={status} body={body}")]
    DefiniteRemote { status: u16, body: String },

    /// Terminal failure of a single batch
    #[error("Batch {batch_id} failed: {reason}")]
    BatchFailed { batch_id: String, reason: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
