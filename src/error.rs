//! Error handling for the WaterWise core
//!
//! The risk analyzer itself never fails; errors only arise from
//! configuration loading and reading-log storage.

use thiserror::Error;

/// Library error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(&'static str),
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
