//! Participant dataset loading
//!
//! The dataset is a JSON array of participant objects. A file that does not
//! parse into that shape is a configuration problem and stops the run before
//! anything is sent.

use crate::core::models::Participant;
use crate::utils::error::{Result, UploadError};
use std::path::Path;
use tracing::{debug, info};

/// Parse a dataset from a JSON string
pub fn parse_participants(content: &str) -> Result<Vec<Participant>> {
    serde_json::from_str(content).map_err(|e| {
        UploadError::invalid_configuration(format!("Malformed participant data: {}", e))
    })
}

/// Load a dataset from a JSON file
pub async fn load_participants<P: AsRef<Path>>(path: P) -> Result<Vec<Participant>> {
    let path = path.as_ref();
    debug!("Loading participants from: {:?}", path);

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        UploadError::invalid_configuration(format!(
            "Failed to read participant file {}: {}",
            path.display(),
            e
        ))
    })?;

    let participants = parse_participants(&content)?;
    info!(count = participants.len(), "Loaded participants");
    Ok(participants)
}
