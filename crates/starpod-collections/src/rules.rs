//! Scoring rules for rule-backed collections.
//!
//! Thresholds are calibrated against simple-mode scores. A collection slug
//! with no rule is static-only.

use tracing::debug;

use starpod_topics::KeywordRegistry;
use starpod_types::{CollectionDefinition, ScoringRule};

use crate::baseline::BaselineCollection;

/// Built-in `(collection slug, threshold)` pairs; keywords come from the
/// registry entry of the same identifier.
pub const BUILTIN_THRESHOLDS: &[(&str, u32)] = &[
    ("building-with-llms", 1),
    ("ai-ml", 6),
    ("typescript", 6),
    ("accessibility", 4),
    ("css", 6),
    ("testing", 6),
];

/// Ordered table of collection slug to scoring rule.
#[derive(Debug, Clone, Default)]
pub struct CollectionRules {
    rules: Vec<(String, ScoringRule)>,
}

impl CollectionRules {
    /// An empty table: every collection is static-only.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table, with keywords taken from `registry`.
    ///
    /// Entries whose slug is missing from the registry are skipped.
    pub fn builtin(registry: &KeywordRegistry) -> Self {
        let rules = BUILTIN_THRESHOLDS
            .iter()
            .filter_map(|(slug, threshold)| {
                registry.get(slug).map(|keywords| {
                    (
                        slug.to_string(),
                        ScoringRule::new(keywords.clone(), *threshold),
                    )
                })
            })
            .collect();
        Self { rules }
    }

    /// Add or replace the rule for `slug`.
    pub fn insert(&mut self, slug: impl Into<String>, rule: ScoringRule) {
        let slug = slug.into();
        match self.rules.iter_mut().find(|(s, _)| *s == slug) {
            Some((_, existing)) => *existing = rule,
            None => self.rules.push((slug, rule)),
        }
    }

    /// Rule for `slug`, or `None` when the collection is static-only.
    pub fn get(&self, slug: &str) -> Option<&ScoringRule> {
        self.rules.iter().find(|(s, _)| s == slug).map(|(_, r)| r)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no collection has a rule.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Pair each baseline with its rule.
    ///
    /// A rule declared inline on the baseline wins over the table.
    pub fn attach(&self, baselines: Vec<BaselineCollection>) -> Vec<CollectionDefinition> {
        baselines
            .into_iter()
            .map(|baseline| {
                let rule = baseline
                    .rule
                    .or_else(|| self.get(&baseline.collection.slug).cloned());
                match rule {
                    Some(rule) => CollectionDefinition::with_rule(baseline.collection, rule),
                    None => {
                        debug!(
                            slug = %baseline.collection.slug,
                            "No scoring rule, collection is static-only"
                        );
                        CollectionDefinition::static_only(baseline.collection)
                    }
                }
            })
            .collect()
    }
}
