//! Word tokenization and frequency counting.
//!
//! Text is lower-cased and split on every character that is not an ASCII
//! letter, digit or underscore. Tokens of two characters or fewer and
//! common English function words are discarded.

use std::collections::HashMap;

/// Tokens this long or shorter are discarded.
const MIN_TOKEN_LEN: usize = 2;

/// Common English function words excluded from frequency counts.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "should", "could", "may", "might", "must", "can", "this",
    "that", "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
    "whom", "whose", "where", "when", "why", "how", "all", "each", "every", "both", "few",
    "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "just", "now", "then", "here", "there", "up", "down", "out", "off",
    "over", "under", "again", "further", "once", "about", "into", "through", "during", "before",
    "after", "above", "below", "between", "among", "around", "against", "within", "without",
];

/// Tokenize text into lowercase words.
///
/// Filters out:
/// - Stop words (common English words)
/// - Tokens of two characters or fewer
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| s.len() > MIN_TOKEN_LEN)
        .filter(|s| !is_stop_word(s))
        .map(String::from)
        .collect()
}

/// Token -> occurrence count for a block of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, u32>,
}

impl WordFrequencies {
    /// Count the tokens of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in tokenize(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `token` as a whole word (0 when absent).
    ///
    /// `token` must already be lower-case.
    pub fn get(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check if a word is a stop word.
fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
