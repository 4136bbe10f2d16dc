//! Non-fatal problems found while building a corpus.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Why a transcript file was left out of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CorpusIssue {
    /// No episode record has this transcript's episode number
    MissingMetadata {
        /// Transcript file
        path: PathBuf,
        /// File stem used as the episode number
        key: String,
    },
    /// The file could not be read
    ReadFailure {
        /// Transcript file
        path: PathBuf,
        /// Error description
        reason: String,
    },
}

impl CorpusIssue {
    /// True for [`CorpusIssue::ReadFailure`].
    pub fn is_read_failure(&self) -> bool {
        matches!(self, CorpusIssue::ReadFailure { .. })
    }
}

impl fmt::Display for CorpusIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusIssue::MissingMetadata { path, key } => {
                write!(f, "{}: no episode numbered {key}", path.display())
            }
            CorpusIssue::ReadFailure { path, reason } => {
                write!(f, "{}: {reason}", path.display())
            }
        }
    }
}
