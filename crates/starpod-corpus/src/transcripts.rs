//! Transcript files on disk.
//!
//! One markdown file per episode, named `<episode number>.md`, directly in
//! the transcript directory. The directory is always passed in explicitly.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::issue::CorpusIssue;

/// Extension of transcript files.
pub const TRANSCRIPT_EXTENSION: &str = "md";

/// A transcript read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// File stem (the episode number)
    pub key: String,
    /// Source file
    pub path: PathBuf,
    /// Raw text
    pub text: String,
}

/// Transcripts keyed by episode number, in file-name order.
///
/// File names compare as plain strings, so `10.md` sorts before `2.md`.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    transcripts: Vec<Transcript>,
    issues: Vec<CorpusIssue>,
}

impl TranscriptStore {
    /// Read every `*.md` file directly inside `dir`.
    ///
    /// A missing directory gives an empty store. Unreadable files are
    /// logged, recorded as [`CorpusIssue::ReadFailure`] and skipped.
    pub fn load(dir: &Path) -> Self {
        let mut store = TranscriptStore::default();

        if !dir.is_dir() {
            warn!(dir = %dir.display(), "Transcript directory not found, corpus is empty");
            return store;
        }

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| dir.to_path_buf());
                    warn!(path = %path.display(), error = %e, "Failed to list transcript");
                    store.issues.push(CorpusIssue::ReadFailure {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !has_transcript_extension(path) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                debug!(path = %path.display(), "Skipping transcript with non UTF-8 name");
                continue;
            };

            match fs::read_to_string(path) {
                Ok(text) => store.transcripts.push(Transcript {
                    key: key.to_string(),
                    path: path.to_path_buf(),
                    text,
                }),
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to read transcript, skipping"
                    );
                    store.issues.push(CorpusIssue::ReadFailure {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        sort_by_file_name(&mut store.transcripts);
        info!(
            dir = %dir.display(),
            transcripts = store.transcripts.len(),
            failures = store.issues.len(),
            "Loaded transcripts"
        );
        store
    }

    /// Build a store from in-memory `(episode number, text)` pairs.
    pub fn from_texts<I, K, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<String>,
    {
        let mut transcripts: Vec<Transcript> = texts
            .into_iter()
            .map(|(key, text)| {
                let key = key.into();
                Transcript {
                    path: PathBuf::from(format!("{key}.{TRANSCRIPT_EXTENSION}")),
                    key,
                    text: text.into(),
                }
            })
            .collect();
        sort_by_file_name(&mut transcripts);
        Self {
            transcripts,
            issues: Vec::new(),
        }
    }

    /// Transcripts in file-name order.
    pub fn transcripts(&self) -> &[Transcript] {
        &self.transcripts
    }

    /// Text for an episode number.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.transcripts
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.text.as_str())
    }

    /// Files that could not be read.
    pub fn issues(&self) -> &[CorpusIssue] {
        &self.issues
    }

    /// Number of transcripts loaded.
    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    /// True when no transcript was loaded.
    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Transcript>, Vec<CorpusIssue>) {
        (self.transcripts, self.issues)
    }
}

fn has_transcript_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == TRANSCRIPT_EXTENSION)
}

fn sort_by_file_name(transcripts: &mut [Transcript]) {
    transcripts.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
}
