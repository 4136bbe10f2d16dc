//! Curated collections and their scoring rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::keywords::KeywordSet;

/// A named grouping of episode slugs as consumed by page rendering.
///
/// Any field other than `slug`, `title` and `episodeSlugs` is kept in
/// `metadata` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// URL slug
    pub slug: String,
    /// Display title
    pub title: String,
    /// Episode slugs belonging to the collection
    #[serde(default)]
    pub episode_slugs: Vec<String>,
    /// Passthrough metadata (subtitle, description, image, ...)
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Collection {
    /// Create a collection with no extra metadata.
    pub fn new<I, S>(slug: impl Into<String>, title: impl Into<String>, episode_slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slug: slug.into(),
            title: title.into(),
            episode_slugs: episode_slugs.into_iter().map(Into::into).collect(),
            metadata: Map::new(),
        }
    }

    /// Attach a metadata field.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Keyword rule that auto-augments a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRule {
    /// Phrases scored in simple mode
    pub keywords: KeywordSet,
    /// Inclusive minimum score for membership
    pub threshold: u32,
}

impl ScoringRule {
    /// Create a scoring rule.
    pub fn new(keywords: KeywordSet, threshold: u32) -> Self {
        Self {
            keywords,
            threshold,
        }
    }

    /// Whether a score clears this rule's threshold.
    pub fn admits(&self, score: u32) -> bool {
        score >= self.threshold
    }
}

/// A curated collection baseline plus its optional scoring rule.
///
/// Definitions without a rule are static-only: their baseline is emitted
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDefinition {
    /// Baseline collection (its `episode_slugs` are the curated members)
    pub collection: Collection,
    /// Rule used to add members, if any
    pub scoring_rule: Option<ScoringRule>,
}

impl CollectionDefinition {
    /// A definition with no scoring rule.
    pub fn static_only(collection: Collection) -> Self {
        Self {
            collection,
            scoring_rule: None,
        }
    }

    /// A definition that is augmented by `rule`.
    pub fn with_rule(collection: Collection, rule: ScoringRule) -> Self {
        Self {
            collection,
            scoring_rule: Some(rule),
        }
    }

    /// Collection slug.
    pub fn slug(&self) -> &str {
        &self.collection.slug
    }
}
