//! Configuration models

mod generator;
mod sender;

pub use generator::GeneratorConfig;
pub use sender::{RetryConfig, SenderConfig};
