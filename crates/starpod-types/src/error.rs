//! Error types for the starpod system.

use thiserror::Error;

/// Unified error type for shared starpod operations.
#[derive(Debug, Error)]
pub enum StarpodError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
