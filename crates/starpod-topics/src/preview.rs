//! Simple-mode rankings used by the analysis report.
//!
//! These lists help curators seed collection baselines: the full LLM
//! match list and capped previews for a handful of existing collections.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use starpod_types::{CorpusEntry, KeywordSet};

use crate::extraction::RankedEpisode;
use crate::registry::{accessibility_preview_keywords, ai_ml_preview_keywords, KeywordRegistry};
use crate::scoring::score_simple;

/// Rank entries by simple-mode score against `keywords`.
///
/// Keeps entries scoring strictly above `floor`, sorted descending (ties in
/// corpus order), truncated to `limit` when given.
pub fn rank_by_keywords(
    corpus: &[CorpusEntry],
    keywords: &KeywordSet,
    floor: u32,
    limit: Option<usize>,
) -> Vec<RankedEpisode> {
    let scores: Vec<u32> = corpus
        .par_iter()
        .map(|entry| score_simple(&entry.transcript_text, keywords))
        .collect();

    let mut ranked: Vec<RankedEpisode> = corpus
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score > floor)
        .map(|(entry, score)| RankedEpisode {
            episode_number: entry.episode_number.clone(),
            episode_slug: entry.episode_slug.clone(),
            title: entry.title.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Every entry with a non-zero LLM score, best first.
pub fn llm_matches(corpus: &[CorpusEntry], registry: &KeywordRegistry) -> Vec<RankedEpisode> {
    rank_by_keywords(corpus, registry.llm_keywords(), 0, None)
}

/// A capped, floored ranking for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDefinition {
    /// Collection slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Keywords scored in simple mode
    pub keywords: KeywordSet,
    /// Entries must score strictly above this
    pub floor: u32,
    /// Maximum entries listed
    pub limit: usize,
}

impl PreviewDefinition {
    fn from_registry(
        registry: &KeywordRegistry,
        slug: &str,
        name: &str,
        floor: u32,
        limit: usize,
    ) -> Self {
        Self {
            slug: slug.to_string(),
            name: name.to_string(),
            keywords: registry.get(slug).cloned().unwrap_or_default(),
            floor,
            limit,
        }
    }
}

/// Preview lists printed by the analysis report.
pub fn default_previews(registry: &KeywordRegistry) -> Vec<PreviewDefinition> {
    vec![
        PreviewDefinition::from_registry(registry, "css", "CSS", 5, 30),
        PreviewDefinition::from_registry(registry, "typescript", "TypeScript", 5, 30),
        PreviewDefinition::from_registry(registry, "testing", "Testing", 5, 30),
        PreviewDefinition {
            slug: "accessibility".to_string(),
            name: "Accessibility".to_string(),
            keywords: accessibility_preview_keywords(registry),
            floor: 3,
            limit: 25,
        },
        PreviewDefinition {
            slug: "ai-ml".to_string(),
            name: "AI/ML".to_string(),
            keywords: ai_ml_preview_keywords(registry),
            floor: 5,
            limit: 30,
        },
    ]
}

/// Ranked slugs for one preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPreview {
    /// Collection slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Episode slugs, best first
    pub episode_slugs: Vec<String>,
}

/// Run every preview over the corpus.
pub fn collection_previews(
    corpus: &[CorpusEntry],
    definitions: &[PreviewDefinition],
) -> Vec<CollectionPreview> {
    definitions
        .iter()
        .map(|def| CollectionPreview {
            slug: def.slug.clone(),
            name: def.name.clone(),
            episode_slugs: rank_by_keywords(corpus, &def.keywords, def.floor, Some(def.limit))
                .into_iter()
                .map(|e| e.episode_slug)
                .collect(),
        })
        .collect()
}
