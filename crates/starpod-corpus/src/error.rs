//! Corpus error types.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors while loading corpus inputs.
///
/// Problems with individual transcripts are not errors; they are reported
/// as [`CorpusIssue`](crate::CorpusIssue)s and the file is skipped.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Episode metadata could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Episode metadata is not valid JSON
    #[error("Invalid episode metadata in {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}
