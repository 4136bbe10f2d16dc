//! Loading a corpus from an on-disk transcript directory.

use std::fs;

use tempfile::TempDir;

use starpod_corpus::{load_episodes, Corpus, CorpusIssue};

/// Writes an episode feed and a transcript directory.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("transcripts")).unwrap();
        fs::write(
            dir.path().join("episodes.json"),
            r#"[
                {"id": "a", "title": "Intro to Signals", "episodeNumber": "1", "episodeSlug": "intro-to-signals"},
                {"id": "b", "title": "Testing Everything", "episodeNumber": "2", "episodeSlug": "testing-everything"},
                {"id": "c", "title": "Holiday Special", "episodeNumber": "Bonus", "episodeSlug": "holiday-special"}
            ]"#,
        )
        .unwrap();
        Self { dir }
    }

    fn transcript(&self, name: &str, text: &str) {
        fs::write(self.dir.path().join("transcripts").join(name), text).unwrap();
    }
}

#[test]
fn test_corpus_from_disk() {
    let fixture = Fixture::new();
    fixture.transcript("2.md", "jest and vitest");
    fixture.transcript("1.md", "signals everywhere");
    fixture.transcript("99.md", "no episode for this one");
    fixture.transcript("README.txt", "not a transcript");

    let episodes = load_episodes(&fixture.dir.path().join("episodes.json")).unwrap();
    let corpus = Corpus::load(&fixture.dir.path().join("transcripts"), &episodes);

    let slugs: Vec<&str> = corpus
        .entries()
        .iter()
        .map(|e| e.episode_slug.as_str())
        .collect();
    assert_eq!(slugs, vec!["intro-to-signals", "testing-everything"]);
    assert_eq!(corpus.entries()[1].transcript_text, "jest and vitest");

    assert_eq!(corpus.issues().len(), 1);
    assert!(matches!(
        &corpus.issues()[0],
        CorpusIssue::MissingMetadata { key, .. } if key == "99"
    ));
}

#[test]
fn test_unreadable_transcript_does_not_abort() {
    let fixture = Fixture::new();
    fixture.transcript("1.md", "fine");
    fs::write(
        fixture.dir.path().join("transcripts").join("2.md"),
        [0xc3, 0x28, 0xa0],
    )
    .unwrap();

    let episodes = load_episodes(&fixture.dir.path().join("episodes.json")).unwrap();
    let corpus = Corpus::load(&fixture.dir.path().join("transcripts"), &episodes);

    assert_eq!(corpus.len(), 1);
    assert!(corpus.issues().iter().any(CorpusIssue::is_read_failure));
}

#[test]
fn test_missing_transcript_dir_gives_empty_corpus() {
    let fixture = Fixture::new();
    let episodes = load_episodes(&fixture.dir.path().join("episodes.json")).unwrap();
    let corpus = Corpus::load(&fixture.dir.path().join("absent"), &episodes);
    assert!(corpus.is_empty());
    assert!(corpus.text_by_slug().is_empty());
}
