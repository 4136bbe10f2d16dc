//! # starpod-topics
//!
//! Keyword-based topic scoring and discovery for podcast transcripts.
//!
//! ## Features
//! - Ordered keyword registry, with a dedicated "building-with-llms" list
//! - Simple and frequency-augmented relevance scoring
//! - Topic discovery that ranks episodes per topic and proposes collections
//! - Simple-mode rankings for the analysis report

pub mod error;
pub mod extraction;
pub mod preview;
pub mod registry;
pub mod scoring;
pub mod tokenize;

pub use error::TopicsError;
pub use extraction::{
    extract_topics, order_for_report, topic_slug, topic_title, ExtractionConfig, RankedEpisode,
    TopicCandidates, TopicExtractor, TopicSuggestion, DISCOVERY_FLOOR,
};
pub use preview::{
    collection_previews, default_previews, llm_matches, rank_by_keywords, CollectionPreview,
    PreviewDefinition,
};
pub use registry::{KeywordRegistry, Topic, LLM_KEYWORDS, LLM_TOPIC, TOPIC_KEYWORDS};
pub use scoring::{
    score_frequency_augmented, score_simple, PreparedText, ScoringMode, KEYWORD_WEIGHT,
};
pub use tokenize::{tokenize, WordFrequencies};

