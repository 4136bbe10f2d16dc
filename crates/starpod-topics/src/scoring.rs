//! Relevance scoring of free text against a keyword set.
//!
//! Two modes exist and are deliberately kept apart:
//! - [`ScoringMode::Simple`]: every case-insensitive substring occurrence of
//!   a phrase adds [`KEYWORD_WEIGHT`]. Collection thresholds are calibrated
//!   against this mode.
//! - [`ScoringMode::FrequencyAugmented`]: the simple score plus, per phrase,
//!   the number of times the phrase appears as a whole token. Used only for
//!   topic discovery.

use serde::{Deserialize, Serialize};
use starpod_types::KeywordSet;

use crate::tokenize::WordFrequencies;

/// Score added per substring occurrence of a keyword.
pub const KEYWORD_WEIGHT: u32 = 2;

/// Which scoring calibration to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Substring occurrences only
    #[default]
    Simple,
    /// Substring occurrences plus exact-token frequency
    FrequencyAugmented,
}

impl ScoringMode {
    /// Score `text` against `keywords` in this mode.
    pub fn score(self, text: &str, keywords: &KeywordSet) -> u32 {
        match self {
            ScoringMode::Simple => score_simple(text, keywords),
            ScoringMode::FrequencyAugmented => score_frequency_augmented(text, keywords),
        }
    }
}

/// Simple-mode score of `text` against `keywords`.
pub fn score_simple(text: &str, keywords: &KeywordSet) -> u32 {
    substring_score(&text.to_lowercase(), keywords)
}

/// Frequency-augmented score of `text` against `keywords`.
pub fn score_frequency_augmented(text: &str, keywords: &KeywordSet) -> u32 {
    PreparedText::new(text).frequency_augmented_score(keywords)
}

/// Text normalized once so it can be scored against many keyword sets.
///
/// The topic extractor scores every transcript against every topic;
/// lower-casing and tokenizing once per transcript keeps that linear.
#[derive(Debug, Clone)]
pub struct PreparedText {
    lower: String,
    frequencies: WordFrequencies,
}

impl PreparedText {
    /// Lower-case and tokenize `text`.
    pub fn new(text: &str) -> Self {
        let lower = text.to_lowercase();
        let frequencies = WordFrequencies::from_text(&lower);
        Self { lower, frequencies }
    }

    /// Simple-mode score.
    pub fn simple_score(&self, keywords: &KeywordSet) -> u32 {
        substring_score(&self.lower, keywords)
    }

    /// Frequency-augmented score.
    pub fn frequency_augmented_score(&self, keywords: &KeywordSet) -> u32 {
        let token_hits = keywords
            .iter()
            .fold(0u32, |acc, k| acc.saturating_add(self.frequencies.get(k)));
        self.simple_score(keywords).saturating_add(token_hits)
    }
}

/// Sum of weighted, non-overlapping substring counts. `lower` must be
/// lower-case; keyword phrases already are.
fn substring_score(lower: &str, keywords: &KeywordSet) -> u32 {
    keywords.iter().fold(0u32, |acc, keyword| {
        let hits = u32::try_from(lower.matches(keyword).count()).unwrap_or(u32::MAX);
        acc.saturating_add(hits.saturating_mul(KEYWORD_WEIGHT))
    })
}
