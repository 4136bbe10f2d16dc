//! End-to-end runs of the driver commands over an on-disk site layout.

use std::fs;

use serde_json::Value;
use tempfile::TempDir;

use starpod_cli::{run_analyze, run_collections};
use starpod_corpus::Corpus;
use starpod_topics::{llm_matches, KeywordRegistry};
use starpod_types::{Episode, Settings};

/// A temporary site: episode feed, transcripts and collection baselines.
struct Site {
    dir: TempDir,
}

impl Site {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let transcripts = dir.path().join("transcripts");
        fs::create_dir(&transcripts).unwrap();

        fs::write(
            dir.path().join("episodes.json"),
            r#"[
                {"id": "a", "title": "Intro to Signals", "episodeNumber": "1", "episodeSlug": "intro-to-signals"},
                {"id": "b", "title": "Testing Everything", "episodeNumber": "2", "episodeSlug": "testing-everything"},
                {"id": "c", "title": "Agents and RAG", "episodeNumber": "3", "episodeSlug": "agents-and-rag"}
            ]"#,
        )
        .unwrap();
        fs::write(transcripts.join("1.md"), "Signals everywhere.").unwrap();
        fs::write(transcripts.join("2.md"), "jest and vitest and testing").unwrap();
        fs::write(transcripts.join("3.md"), "An LLM agent using RAG.").unwrap();

        fs::write(
            dir.path().join("collections.toml"),
            r#"
[[collections]]
slug = "testing"
title = "Testing"
subtitle = "Ship with confidence"
episodeSlugs = ["legacy-episode"]

[[collections]]
slug = "favorites"
title = "Favorites"
episodeSlugs = ["zebra", "intro-to-signals"]
"#,
        )
        .unwrap();

        Self { dir }
    }

    fn settings(&self) -> Settings {
        let path = |name: &str| self.dir.path().join(name).to_string_lossy().into_owned();
        Settings {
            transcripts_dir: path("transcripts"),
            episodes_path: path("episodes.json"),
            collections_path: path("collections.toml"),
            ..Settings::default()
        }
    }
}

#[test]
fn test_collections_augments_and_passes_through() {
    let site = Site::new();
    let mut out = Vec::new();
    run_collections(&site.settings(), &mut out).unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    let collections = value.as_array().unwrap();
    assert_eq!(collections.len(), 2);

    let testing = &collections[0];
    assert_eq!(testing["slug"], "testing");
    assert_eq!(testing["subtitle"], "Ship with confidence");
    assert_eq!(
        testing["episodeSlugs"],
        serde_json::json!(["legacy-episode", "testing-everything"])
    );

    let favorites = &collections[1];
    assert_eq!(
        favorites["episodeSlugs"],
        serde_json::json!(["intro-to-signals", "zebra"])
    );
}

#[test]
fn test_collections_missing_baseline_fails() {
    let site = Site::new();
    let mut settings = site.settings();
    settings.collections_path = site
        .dir
        .path()
        .join("absent.toml")
        .to_string_lossy()
        .into_owned();

    let mut out = Vec::new();
    let err = run_collections(&settings, &mut out).unwrap_err();
    assert!(err.to_string().contains("Failed to load collections"));
}

#[test]
fn test_analyze_json_report() {
    let site = Site::new();
    let mut out = Vec::new();
    run_analyze(&site.settings(), true, None, &mut out).unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["transcripts"], 3);
    assert_eq!(value["llm"]["episodeSlugs"], serde_json::json!(["agents-and-rag"]));
    assert!(value["suggestions"].as_array().unwrap().is_empty());
}

#[test]
fn test_analyze_text_report() {
    let site = Site::new();
    let mut out = Vec::new();
    run_analyze(&site.settings(), false, Some(5), &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Loaded 3 transcripts"));
    assert!(text.contains("Found 1 episodes matching LLM keywords"));
    assert!(text.contains("Found 0 potential collections"));
}

#[test]
fn test_ties_follow_transcript_file_name_order() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("2.md"), "an llm").unwrap();
    fs::write(dir.path().join("10.md"), "an llm").unwrap();
    let episodes = vec![
        Episode::new("a", "Two", Some("2"), "two"),
        Episode::new("b", "Ten", Some("10"), "ten"),
    ];

    let corpus = Corpus::load(dir.path(), &episodes);
    let slugs: Vec<String> = llm_matches(corpus.entries(), KeywordRegistry::builtin())
        .into_iter()
        .map(|e| e.episode_slug)
        .collect();
    assert_eq!(slugs, vec!["ten", "two"]);
}
