//! Loading curated collection baselines from static configuration.
//!
//! Accepted layouts:
//! - TOML: a `[[collections]]` array of tables
//! - JSON: either a top-level array or `{ "collections": [...] }`
//!
//! Each entry holds `slug`, `title`, `episodeSlugs`, an optional inline
//! `rule = { keywords = [...], threshold = N }`, and any other metadata,
//! which is passed through untouched.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use starpod_types::{Collection, ScoringRule};

use crate::error::CollectionsError;

/// A curated collection as written in the baseline file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineCollection {
    /// Inline scoring rule, overriding the built-in table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<ScoringRule>,
    /// Collection with its curated members
    #[serde(flatten)]
    pub collection: Collection,
}

impl BaselineCollection {
    /// Create a baseline entry.
    pub fn new(collection: Collection, rule: Option<ScoringRule>) -> Self {
        Self { rule, collection }
    }
}

#[derive(Debug, Deserialize)]
struct BaselineFile {
    #[serde(default)]
    collections: Vec<BaselineCollection>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonBaselines {
    List(Vec<BaselineCollection>),
    File(BaselineFile),
}

/// Parse TOML baselines.
pub fn parse_toml(content: &str, path: &Path) -> Result<Vec<BaselineCollection>, CollectionsError> {
    let file: BaselineFile = toml::from_str(content).map_err(|source| CollectionsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    check_unique(file.collections)
}

/// Parse JSON baselines.
pub fn parse_json(content: &str, path: &Path) -> Result<Vec<BaselineCollection>, CollectionsError> {
    let parsed: JsonBaselines =
        serde_json::from_str(content).map_err(|source| CollectionsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let collections = match parsed {
        JsonBaselines::List(list) => list,
        JsonBaselines::File(file) => file.collections,
    };
    check_unique(collections)
}

/// Load baselines from `path`, picking the format by extension
/// (`.json` is JSON, anything else is TOML).
pub fn load_baselines(path: &Path) -> Result<Vec<BaselineCollection>, CollectionsError> {
    let content = fs::read_to_string(path).map_err(|source| CollectionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let baselines = if is_json {
        parse_json(&content, path)?
    } else {
        parse_toml(&content, path)?
    };

    info!(path = %path.display(), collections = baselines.len(), "Loaded collection baselines");
    Ok(baselines)
}

fn check_unique(
    collections: Vec<BaselineCollection>,
) -> Result<Vec<BaselineCollection>, CollectionsError> {
    let mut seen = HashSet::new();
    for baseline in &collections {
        if !seen.insert(baseline.collection.slug.as_str()) {
            return Err(CollectionsError::DuplicateSlug(
                baseline.collection.slug.clone(),
            ));
        }
    }
    Ok(collections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path(name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    #[test]
    fn test_parse_toml_with_inline_rule_and_metadata() {
        let content = r#"
[[collections]]
slug = "css"
title = "CSS"
subtitle = "All things styling"
episodeSlugs = ["container-queries", "tailwind-v4"]

[[collections]]
slug = "design-systems"
title = "Design Systems"
episodeSlugs = []
rule = { keywords = ["Design System", "tokens"], threshold = 4 }
"#;
        let baselines = parse_toml(content, &path("collections.toml")).unwrap();
        assert_eq!(baselines.len(), 2);

        let css = &baselines[0];
        assert!(css.rule.is_none());
        assert_eq!(css.collection.episode_slugs.len(), 2);
        assert_eq!(css.collection.metadata["subtitle"], "All things styling");

        let ds = &baselines[1];
        let rule = ds.rule.as_ref().unwrap();
        assert_eq!(rule.threshold, 4);
        assert_eq!(rule.keywords.phrases(), ["design system", "tokens"]);
        assert!(!ds.collection.metadata.contains_key("rule"));
    }

    #[test]
    fn test_parse_json_array_and_object() {
        let array = r#"[{"slug": "a", "title": "A", "episodeSlugs": ["x"]}]"#;
        let object = r#"{"collections": [{"slug": "a", "title": "A"}]}"#;
        assert_eq!(parse_json(array, &path("c.json")).unwrap().len(), 1);
        assert_eq!(parse_json(object, &path("c.json")).unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let json = r#"[{"slug": "a", "title": "A"}, {"slug": "a", "title": "Again"}]"#;
        let err = parse_json(json, &path("c.json")).unwrap_err();
        assert!(matches!(err, CollectionsError::DuplicateSlug(slug) if slug == "a"));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("collections.json");
        fs::write(&json_path, r#"[{"slug": "a", "title": "A"}]"#).unwrap();
        assert_eq!(load_baselines(&json_path).unwrap()[0].collection.slug, "a");

        let toml_path = dir.path().join("collections.toml");
        fs::write(&toml_path, "[[collections]]\nslug = \"b\"\ntitle = \"B\"\n").unwrap();
        assert_eq!(load_baselines(&toml_path).unwrap()[0].collection.slug, "b");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_baselines(&path("/nonexistent/collections.toml")).unwrap_err();
        assert!(matches!(err, CollectionsError::Io { .. }));
    }
}
