//! Default value functions for configuration

use std::path::PathBuf;

pub fn default_batch_size() -> usize {
    200
}

pub fn default_source() -> String {
    "upstream-rust".to_string()
}

pub fn default_batch_prefix() -> String {
    "run".to_string()
}

pub fn default_max_retries() -> u32 {
    3
}

pub fn default_backoff_base() -> f64 {
    1.5
}

pub fn default_timeout_seconds() -> u64 {
    30
}

pub fn default_outfile() -> PathBuf {
    PathBuf::from("data/participants_seed.json")
}

pub fn default_count() -> usize {
    500
}

pub fn default_event() -> String {
    "event-1001".to_string()
}

pub fn default_match_key_ratio() -> f64 {
    0.7
}

pub fn default_seed() -> u64 {
    42
}
