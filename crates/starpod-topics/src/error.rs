//! Topic error types.

use thiserror::Error;

/// Errors that can occur during topic operations.
#[derive(Debug, Error)]
pub enum TopicsError {
    /// Topic identifier not present in the registry
    #[error("Unknown topic: {0}")]
    UnknownTopic(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
