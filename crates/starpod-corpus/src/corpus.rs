//! Joining transcripts with episode records.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::{debug, info};

use starpod_types::{CorpusEntry, Episode};

use crate::issue::CorpusIssue;
use crate::transcripts::TranscriptStore;

/// Transcripts that have a matching episode record, in transcript file-name order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    issues: Vec<CorpusIssue>,
}

impl Corpus {
    /// Join `store` with `episodes`.
    ///
    /// Only episodes with a numeric episode number take part. A transcript
    /// with no matching episode is recorded as
    /// [`CorpusIssue::MissingMetadata`] and left out. When two episodes
    /// share a number, the later record wins.
    pub fn assemble(episodes: &[Episode], store: TranscriptStore) -> Self {
        let by_number: HashMap<&str, &Episode> = episodes
            .iter()
            .filter_map(|ep| ep.transcript_key().map(|key| (key, ep)))
            .collect();

        let (transcripts, mut issues) = store.into_parts();
        let mut entries = Vec::with_capacity(transcripts.len());

        for transcript in transcripts {
            match by_number.get(transcript.key.as_str()) {
                Some(episode) => entries.push(CorpusEntry::new(
                    transcript.key,
                    episode.episode_slug.clone(),
                    episode.title.clone(),
                    transcript.text,
                )),
                None => {
                    debug!(path = %transcript.path.display(), "No episode record for transcript");
                    issues.push(CorpusIssue::MissingMetadata {
                        path: transcript.path,
                        key: transcript.key,
                    });
                }
            }
        }

        info!(
            entries = entries.len(),
            skipped = issues.len(),
            "Assembled transcript corpus"
        );
        Self { entries, issues }
    }

    /// Load transcripts from `dir` and join them with `episodes`.
    pub fn load(dir: &Path, episodes: &[Episode]) -> Self {
        Self::assemble(episodes, TranscriptStore::load(dir))
    }

    /// Entries in corpus order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Episode slug -> transcript text.
    pub fn text_by_slug(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.episode_slug.clone(), e.transcript_text.clone()))
            .collect()
    }

    /// Transcripts left out, and why.
    pub fn issues(&self) -> &[CorpusIssue] {
        &self.issues
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no transcript matched an episode.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episodes() -> Vec<Episode> {
        vec![
            Episode::new("a", "Signals", Some("2"), "signals"),
            Episode::new("b", "Bonus Chat", Some("Bonus"), "bonus-chat"),
            Episode::new("c", "Trailer", None, "trailer"),
            Episode::new("d", "Rust Tooling", Some("10"), "rust-tooling"),
        ]
    }

    #[test]
    fn test_assemble_joins_by_number() {
        let store =
            TranscriptStore::from_texts([("10", "rust"), ("2", "signals"), ("7", "orphan")]);
        let corpus = Corpus::assemble(&episodes(), store);

        let slugs: Vec<&str> = corpus
            .entries()
            .iter()
            .map(|e| e.episode_slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["rust-tooling", "signals"]);
        assert_eq!(corpus.entries()[0].title, "Rust Tooling");

        assert_eq!(corpus.issues().len(), 1);
        assert!(matches!(
            &corpus.issues()[0],
            CorpusIssue::MissingMetadata { key, .. } if key == "7"
        ));
    }

    #[test]
    fn test_bonus_transcript_is_missing_metadata() {
        let store = TranscriptStore::from_texts([("Bonus", "bonus text")]);
        let corpus = Corpus::assemble(&episodes(), store);
        assert!(corpus.is_empty());
        assert_eq!(corpus.issues().len(), 1);
    }

    #[test]
    fn test_later_duplicate_number_wins() {
        let eps = vec![
            Episode::new("a", "First", Some("1"), "first"),
            Episode::new("b", "Second", Some("1"), "second"),
        ];
        let corpus = Corpus::assemble(&eps, TranscriptStore::from_texts([("1", "x")]));
        assert_eq!(corpus.entries()[0].episode_slug, "second");
    }

    #[test]
    fn test_text_by_slug() {
        let store = TranscriptStore::from_texts([("10", "rust"), ("2", "signals")]);
        let corpus = Corpus::assemble(&episodes(), store);
        let map = corpus.text_by_slug();
        assert_eq!(map.len(), 2);
        assert_eq!(map["rust-tooling"], "rust");
    }
}
