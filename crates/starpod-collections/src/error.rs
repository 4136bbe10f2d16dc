//! Collection error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading collection baselines.
#[derive(Debug, Error)]
pub enum CollectionsError {
    /// Baseline file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON baseline file is malformed
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// TOML baseline file is malformed
    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// Two baselines share a slug
    #[error("Duplicate collection slug: {0}")]
    DuplicateSlug(String),
}
