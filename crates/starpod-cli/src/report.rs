//! Analysis report: LLM matches, suggested collections and previews.

use std::io::{self, Write};

use serde::Serialize;

use starpod_topics::{
    collection_previews, default_previews, llm_matches, order_for_report, CollectionPreview,
    ExtractionConfig, KeywordRegistry, RankedEpisode, TopicExtractor, TopicSuggestion,
};
use starpod_types::{CorpusEntry, DiscoverySettings};

/// An episode title and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeScore {
    /// Episode title
    pub title: String,
    /// Relevance score
    pub score: u32,
}

/// Summary of one suggested collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionSummary {
    /// Collection slug
    pub slug: String,
    /// Display title
    pub title: String,
    /// Candidate episodes
    pub episode_count: usize,
    /// Highest ranked episodes
    pub top_episodes: Vec<EpisodeScore>,
}

impl SuggestionSummary {
    fn from_suggestion(suggestion: &TopicSuggestion, top: usize) -> Self {
        Self {
            slug: suggestion.slug.clone(),
            title: suggestion.title.clone(),
            episode_count: suggestion.episode_count(),
            top_episodes: suggestion
                .top_episodes(top)
                .iter()
                .map(|e| EpisodeScore {
                    title: e.title.clone(),
                    score: e.score,
                })
                .collect(),
        }
    }
}

/// The "building-with-llms" pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmReport {
    /// Every matching slug, best first
    pub episode_slugs: Vec<String>,
    /// Best matches
    pub top_matches: Vec<RankedEpisode>,
}

/// Full analysis output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Transcripts analyzed
    pub transcripts: usize,
    /// LLM collection pass
    pub llm: LlmReport,
    /// Suggested collections, largest first
    pub suggestions: Vec<SuggestionSummary>,
    /// Previews of existing collections
    pub previews: Vec<CollectionPreview>,
}

impl AnalysisReport {
    /// Run every analysis pass over `corpus`.
    pub fn build(
        corpus: &[CorpusEntry],
        registry: &KeywordRegistry,
        discovery: &DiscoverySettings,
    ) -> Self {
        let matches = llm_matches(corpus, registry);
        let llm = LlmReport {
            episode_slugs: matches.iter().map(|e| e.episode_slug.clone()).collect(),
            top_matches: matches
                .into_iter()
                .take(discovery.llm_top_matches)
                .collect(),
        };

        let extractor = TopicExtractor::new(registry, ExtractionConfig::from(discovery));
        let mut suggestions = extractor.discover(corpus);
        order_for_report(&mut suggestions);

        Self {
            transcripts: corpus.len(),
            llm,
            suggestions: suggestions
                .iter()
                .map(|s| SuggestionSummary::from_suggestion(s, discovery.top_episodes))
                .collect(),
            previews: collection_previews(corpus, &default_previews(registry)),
        }
    }

    /// Write the human-readable report, listing at most `limit` suggestions.
    pub fn write_text(&self, out: &mut impl Write, limit: usize) -> io::Result<()> {
        writeln!(out, "Loaded {} transcripts\n", self.transcripts)?;

        writeln!(out, "=== Building with LLMs Collection ===")?;
        writeln!(
            out,
            "Found {} episodes matching LLM keywords:\n",
            self.llm.episode_slugs.len()
        )?;
        writeln!(out, "Episode slugs for collection:")?;
        writeln!(out, "{}", to_json(&self.llm.episode_slugs)?)?;
        writeln!(out, "\nTop matches:")?;
        for ep in &self.llm.top_matches {
            writeln!(
                out,
                "  {}: {} (score: {})",
                ep.episode_number, ep.title, ep.score
            )?;
        }

        writeln!(out, "\n\n=== Potential Collections ===\n")?;
        writeln!(
            out,
            "Found {} potential collections:\n",
            self.suggestions.len()
        )?;
        for (index, topic) in self.suggestions.iter().take(limit).enumerate() {
            writeln!(out, "{}. {}", index + 1, topic.title)?;
            writeln!(out, "   Slug: {}", topic.slug)?;
            writeln!(out, "   Episodes: {}", topic.episode_count)?;
            writeln!(out, "   Top episodes:")?;
            for ep in &topic.top_episodes {
                writeln!(out, "     - {} (score: {})", ep.title, ep.score)?;
            }
            writeln!(out)?;
        }

        writeln!(out, "\n=== Specific Collection Episodes ===")?;
        for preview in &self.previews {
            writeln!(out, "\n{} Collection:", preview.name)?;
            writeln!(out, "{}", to_json(&preview.episode_slugs)?)?;
        }
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}
