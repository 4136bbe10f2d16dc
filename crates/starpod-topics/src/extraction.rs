//! Topic discovery over a transcript corpus.
//!
//! Every corpus entry is scored against every general topic in
//! frequency-augmented mode. Entries scoring above the discovery floor
//! become candidates for that topic; topics with enough candidates are
//! proposed as new collections.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use starpod_types::{CorpusEntry, DiscoverySettings};

use crate::registry::KeywordRegistry;
use crate::scoring::PreparedText;

/// Candidates must score strictly above this.
pub const DISCOVERY_FLOOR: u32 = 3;

/// Discovery thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Candidates must score strictly above this
    pub floor: u32,
    /// Minimum candidates for a suggestion
    pub min_episodes: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            floor: DISCOVERY_FLOOR,
            min_episodes: 3,
        }
    }
}

impl From<&DiscoverySettings> for ExtractionConfig {
    fn from(settings: &DiscoverySettings) -> Self {
        Self {
            floor: DISCOVERY_FLOOR,
            min_episodes: settings.min_episodes,
        }
    }
}

/// An episode and its score for one topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEpisode {
    /// Episode number
    pub episode_number: String,
    /// Episode slug
    pub episode_slug: String,
    /// Episode title
    pub title: String,
    /// Relevance score
    pub score: u32,
}

impl RankedEpisode {
    fn from_entry(entry: &CorpusEntry, score: u32) -> Self {
        Self {
            episode_number: entry.episode_number.clone(),
            episode_slug: entry.episode_slug.clone(),
            title: entry.title.clone(),
            score,
        }
    }
}

/// Ranked candidates for a single topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCandidates {
    /// Topic identifier
    pub topic_id: String,
    /// Descending by score; ties keep corpus order
    pub episodes: Vec<RankedEpisode>,
}

/// A proposed new collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSuggestion {
    /// Collection slug
    pub slug: String,
    /// Display title
    pub title: String,
    /// Descending by score; ties keep corpus order
    pub ranked_episodes: Vec<RankedEpisode>,
}

impl TopicSuggestion {
    /// Number of candidate episodes.
    pub fn episode_count(&self) -> usize {
        self.ranked_episodes.len()
    }

    /// The `n` highest ranked episodes.
    pub fn top_episodes(&self, n: usize) -> &[RankedEpisode] {
        &self.ranked_episodes[..n.min(self.ranked_episodes.len())]
    }
}

/// Scans a corpus for topic density.
pub struct TopicExtractor<'a> {
    registry: &'a KeywordRegistry,
    config: ExtractionConfig,
}

impl<'a> TopicExtractor<'a> {
    /// Create an extractor over `registry`.
    pub fn new(registry: &'a KeywordRegistry, config: ExtractionConfig) -> Self {
        Self { registry, config }
    }

    /// Rank candidates per topic.
    ///
    /// Topics are returned in registry order; topics with no candidate are
    /// omitted.
    pub fn extract(&self, corpus: &[CorpusEntry]) -> Vec<TopicCandidates> {
        let topics = self.registry.topics();

        // One score row per entry, in corpus order.
        let scores: Vec<Vec<u32>> = corpus
            .par_iter()
            .map(|entry| {
                let prepared = PreparedText::new(&entry.transcript_text);
                topics
                    .iter()
                    .map(|topic| prepared.frequency_augmented_score(&topic.keywords))
                    .collect()
            })
            .collect();

        let mut result = Vec::new();
        for (index, topic) in topics.iter().enumerate() {
            let mut episodes: Vec<RankedEpisode> = corpus
                .iter()
                .zip(&scores)
                .filter(|(_, row)| row[index] > self.config.floor)
                .map(|(entry, row)| RankedEpisode::from_entry(entry, row[index]))
                .collect();

            if episodes.is_empty() {
                continue;
            }

            // Stable: equal scores keep corpus order
            episodes.sort_by(|a, b| b.score.cmp(&a.score));
            debug!(topic = %topic.id, candidates = episodes.len(), "Ranked topic candidates");

            result.push(TopicCandidates {
                topic_id: topic.id.clone(),
                episodes,
            });
        }

        info!(
            entries = corpus.len(),
            topics = result.len(),
            "Topic extraction complete"
        );
        result
    }

    /// Turn candidate lists into suggestions.
    ///
    /// A topic is suggested when it has at least `min_episodes` candidates.
    pub fn suggest(&self, candidates: Vec<TopicCandidates>) -> Vec<TopicSuggestion> {
        candidates
            .into_iter()
            .filter(|c| c.episodes.len() >= self.config.min_episodes)
            .map(|c| TopicSuggestion {
                slug: topic_slug(&c.topic_id),
                title: topic_title(&c.topic_id),
                ranked_episodes: c.episodes,
            })
            .collect()
    }

    /// [`extract`](Self::extract) then [`suggest`](Self::suggest).
    pub fn discover(&self, corpus: &[CorpusEntry]) -> Vec<TopicSuggestion> {
        self.suggest(self.extract(corpus))
    }
}

/// Extract topic candidates with the built-in registry and default floor.
pub fn extract_topics(corpus: &[CorpusEntry]) -> Vec<TopicCandidates> {
    TopicExtractor::new(KeywordRegistry::builtin(), ExtractionConfig::default()).extract(corpus)
}

/// Order suggestions by episode count, largest first.
///
/// Stable, so topics with equal counts keep registry order.
pub fn order_for_report(suggestions: &mut [TopicSuggestion]) {
    suggestions.sort_by(|a, b| b.episode_count().cmp(&a.episode_count()));
}

/// Slug for a topic identifier: whitespace runs become hyphens, lower-cased.
pub fn topic_slug(topic_id: &str) -> String {
    topic_id
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Display title: hyphen-separated words with their first letter upper-cased.
pub fn topic_title(topic_id: &str) -> String {
    topic_id
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
