//! Configuration management
//!
//! Settings come from an optional YAML file and are then overridden by
//! command-line flags. Everything is validated before any request is sent.

mod defaults;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, UploadError};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

/// Read a YAML configuration file without validating it
async fn read_yaml<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    info!("Loading configuration from: {:?}", path);

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        UploadError::invalid_configuration(format!("Failed to read config file: {}", e))
    })?;

    serde_yaml::from_str(&content)
        .map_err(|e| UploadError::invalid_configuration(format!("Failed to parse config: {}", e)))
}

impl SenderConfig {
    /// Load from a YAML file. Validation is left to the caller because
    /// command-line flags may still fill in required fields.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = read_yaml(path).await?;
        debug!("Sender configuration loaded");
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl GeneratorConfig {
    /// Load from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: Self = read_yaml(path).await?;
        debug!("Generator configuration loaded");
        Ok(config)
    }
}
