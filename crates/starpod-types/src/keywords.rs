//! Keyword sets used by the relevance scorer.

use serde::{Deserialize, Deserializer, Serialize};

/// An ordered list of lower-cased keyword phrases.
///
/// Phrases are matched case-insensitively as substrings, so multi-word
/// phrases such as `"screen reader"` are allowed. Duplicates are kept:
/// a repeated phrase contributes to the score once per listing.
/// Empty phrases are dropped when the set is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    phrases: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set, lower-casing every phrase.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    /// Lower-cased phrases in declaration order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Iterate over phrases as string slices.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// True when the set has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Return a new set with `extra` phrases appended.
    pub fn extended<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrases = self.phrases.clone();
        phrases.extend(KeywordSet::new(extra).phrases);
        Self { phrases }
    }
}

impl<'de> Deserialize<'de> for KeywordSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(KeywordSet::new(raw))
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeywordSet::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_phrases() {
        let set = KeywordSet::new(["TypeScript", "Type System"]);
        assert_eq!(set.phrases(), ["typescript", "type system"]);
    }

    #[test]
    fn test_empty_phrases_dropped() {
        let set = KeywordSet::new(["", "css", ""]);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_duplicates_kept() {
        let set = KeywordSet::new(["ai", "AI"]);
        assert_eq!(set.phrases(), ["ai", "ai"]);
    }

    #[test]
    fn test_extended_appends_in_order() {
        let base = KeywordSet::new(["aria", "wcag"]);
        let extended = base.extended(["Focus Management"]);
        assert_eq!(extended.phrases(), ["aria", "wcag", "focus management"]);
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let set: KeywordSet = serde_json::from_str(r#"["RAG", "", "Vector Database"]"#).unwrap();
        assert_eq!(set.phrases(), ["rag", "vector database"]);
    }
}
