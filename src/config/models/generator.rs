//! Generator configuration

use super::super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for synthesizing a participant dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_outfile")]
    pub outfile: PathBuf,
    #[serde(default = "default_count")]
    pub count: usize,
    /// Event id written into every record's metadata
    #[serde(default = "default_event")]
    pub event: String,
    /// Fraction in `[0, 1]` of records issued a match key at creation
    #[serde(default = "default_match_key_ratio")]
    pub match_key_ratio: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            outfile: default_outfile(),
            count: default_count(),
            event: default_event(),
            match_key_ratio: default_match_key_ratio(),
            seed: default_seed(),
        }
    }
}
