//! Episode records and transcript corpus entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Episode number used by the feed for bonus episodes.
pub const BONUS_EPISODE: &str = "Bonus";

/// An episode record as supplied by feed ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Feed item identifier
    pub id: String,
    /// Episode title
    pub title: String,
    /// Digits for regular episodes, "Bonus" for bonus episodes
    #[serde(default)]
    pub episode_number: Option<String>,
    /// URL slug derived from the title
    pub episode_slug: String,
    /// Publication time
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Episode {
    /// Create an episode record with no publication time.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        episode_number: Option<&str>,
        episode_slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            episode_number: episode_number.map(String::from),
            episode_slug: episode_slug.into(),
            published_at: None,
        }
    }

    /// The key this episode's transcript file is stored under.
    ///
    /// Only numeric episode numbers have transcripts; bonus episodes and
    /// records without a number return `None`.
    pub fn transcript_key(&self) -> Option<&str> {
        let number = self.episode_number.as_deref()?.trim();
        if number.is_empty() || number == BONUS_EPISODE {
            return None;
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(number)
    }
}

/// One transcript joined with its episode record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntry {
    /// Episode number (digits)
    pub episode_number: String,
    /// Episode slug
    pub episode_slug: String,
    /// Episode title
    pub title: String,
    /// Raw transcript text
    pub transcript_text: String,
}

impl CorpusEntry {
    /// Create a corpus entry.
    pub fn new(
        episode_number: impl Into<String>,
        episode_slug: impl Into<String>,
        title: impl Into<String>,
        transcript_text: impl Into<String>,
    ) -> Self {
        Self {
            episode_number: episode_number.into(),
            episode_slug: episode_slug.into(),
            title: title.into(),
            transcript_text: transcript_text.into(),
        }
    }
}
