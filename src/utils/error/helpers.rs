//! Helper functions for creating and inspecting errors

use super::types::UploadError;

impl UploadError {
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    pub fn transient<S: Into<String>>(message: S) -> Self {
        Self::TransientTransport(message.into())
    }

    pub fn definite_remote<S: Into<String>>(status: u16, body: S) -> Self {
        Self::DefiniteRemote {
            status,
            body: body.into(),
        }
    }

    pub fn batch_failed<B: Into<String>, R: Into<String>>(batch_id: B, reason: R) -> Self {
        Self::BatchFailed {
            batch_id: batch_id.into(),
            reason: reason.into(),
        }
    }

    /// Only transport-level faults are worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientTransport(_))
    }
}
