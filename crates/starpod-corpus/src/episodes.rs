//! Episode metadata supplied by feed ingestion.

use std::fs;
use std::path::Path;

use tracing::info;

use starpod_types::Episode;

use crate::error::CorpusError;

/// Parse a JSON array of episode records.
pub fn parse_episodes(content: &str, path: &Path) -> Result<Vec<Episode>, CorpusError> {
    serde_json::from_str(content).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load episode records from a JSON file.
pub fn load_episodes(path: &Path) -> Result<Vec<Episode>, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let episodes = parse_episodes(&content, path)?;
    let numbered = episodes
        .iter()
        .filter(|ep| ep.transcript_key().is_some())
        .count();
    info!(
        path = %path.display(),
        episodes = episodes.len(),
        numbered,
        "Loaded episode metadata"
    );
    Ok(episodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_episodes() {
        let json = r#"[
            {"id": "1", "title": "One", "episodeNumber": "1", "episodeSlug": "one"},
            {"id": "2", "title": "Extra", "episodeNumber": "Bonus", "episodeSlug": "extra"}
        ]"#;
        let episodes = parse_episodes(json, Path::new("episodes.json")).unwrap();
        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[1].transcript_key(), None);
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_episodes("{not json", Path::new("feed.json")).unwrap_err();
        assert!(err.to_string().contains("feed.json"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_episodes(Path::new("/nope/episodes.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
