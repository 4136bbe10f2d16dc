//! Collection membership resolution.
//!
//! Membership is the curated baseline plus every transcript whose
//! simple-mode score reaches the collection's threshold. Augmentation only
//! ever adds members; a baseline episode stays even if it scores zero.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use tracing::{debug, info};

use starpod_topics::score_simple;
use starpod_types::{Collection, CollectionDefinition};

/// Resolve membership for every definition.
///
/// `corpus` maps episode slug to transcript text. Collections are returned
/// in input order with sorted, de-duplicated `episode_slugs`; all other
/// fields pass through unchanged.
pub fn resolve(
    definitions: &[CollectionDefinition],
    corpus: &BTreeMap<String, String>,
) -> Vec<Collection> {
    // For each transcript, which definitions admit it.
    let admitted: Vec<(&str, Vec<bool>)> = corpus
        .par_iter()
        .map(|(slug, text)| {
            let row = definitions
                .iter()
                .map(|def| {
                    def.scoring_rule
                        .as_ref()
                        .is_some_and(|rule| rule.admits(score_simple(text, &rule.keywords)))
                })
                .collect();
            (slug.as_str(), row)
        })
        .collect();

    let resolved: Vec<Collection> = definitions
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let mut members: BTreeSet<&str> = def
                .collection
                .episode_slugs
                .iter()
                .map(String::as_str)
                .collect();
            let baseline = members.len();

            members.extend(
                admitted
                    .iter()
                    .filter(|(_, row)| row[index])
                    .map(|(slug, _)| *slug),
            );

            debug!(
                slug = %def.slug(),
                baseline,
                added = members.len() - baseline,
                rule_backed = def.scoring_rule.is_some(),
                "Resolved collection"
            );

            Collection {
                episode_slugs: members.into_iter().map(String::from).collect(),
                ..def.collection.clone()
            }
        })
        .collect();

    info!(
        collections = resolved.len(),
        transcripts = corpus.len(),
        "Collection membership resolved"
    );
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use starpod_types::{KeywordSet, ScoringRule};

    fn corpus(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    fn rule(keywords: &[&str], threshold: u32) -> ScoringRule {
        ScoringRule::new(KeywordSet::new(keywords.iter()), threshold)
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let def = CollectionDefinition::with_rule(
            Collection::new("llm", "LLMs", Vec::<String>::new()),
            rule(&["llm", "rag"], 6),
        );
        let corpus = corpus(&[("exact", "LLM and RAG and llm"), ("below", "llm and rag")]);
        let out = resolve(&[def], &corpus);
        assert_eq!(out[0].episode_slugs, vec!["exact"]);
    }

    #[test]
    fn test_baseline_never_removed() {
        let def = CollectionDefinition::with_rule(
            Collection::new("css", "CSS", ["zeta-episode", "alpha-episode"]),
            rule(&["css"], 6),
        );
        let corpus = corpus(&[("zeta-episode", "no matching words here")]);
        let out = resolve(&[def], &corpus);
        assert_eq!(out[0].episode_slugs, vec!["alpha-episode", "zeta-episode"]);
    }

    #[test]
    fn test_static_only_passthrough() {
        let collection = Collection::new("interviews", "Interviews", ["b", "a", "b"])
            .with_metadata("subtitle", "Conversations");
        let def = CollectionDefinition::static_only(collection);
        let corpus = corpus(&[("c", "interviews interviews interviews")]);
        let out = resolve(&[def], &corpus);
        assert_eq!(out[0].episode_slugs, vec!["a", "b"]);
        assert_eq!(out[0].metadata["subtitle"], "Conversations");
        assert_eq!(out[0].title, "Interviews");
    }

    #[test]
    fn test_order_and_idempotence() {
        let defs = vec![
            CollectionDefinition::with_rule(
                Collection::new("testing", "Testing", ["m"]),
                rule(&["jest"], 2),
            ),
            CollectionDefinition::static_only(Collection::new("misc", "Misc", ["q"])),
            CollectionDefinition::with_rule(
                Collection::new("css", "CSS", Vec::<String>::new()),
                rule(&["css"], 2),
            ),
        ];
        let corpus = corpus(&[("z", "jest and css"), ("a", "jest"), ("k", "css")]);

        let first = resolve(&defs, &corpus);
        let second = resolve(&defs, &corpus);
        assert_eq!(first, second);

        let slugs: Vec<&str> = first.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["testing", "misc", "css"]);
        assert_eq!(first[0].episode_slugs, vec!["a", "m", "z"]);
        assert_eq!(first[1].episode_slugs, vec!["q"]);
        assert_eq!(first[2].episode_slugs, vec!["k", "z"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(resolve(&[], &BTreeMap::new()).is_empty());

        let def = CollectionDefinition::with_rule(
            Collection::new("css", "CSS", ["a"]),
            rule(&["css"], 1),
        );
        let out = resolve(&[def], &BTreeMap::new());
        assert_eq!(out[0].episode_slugs, vec!["a"]);
    }

    #[test]
    fn test_empty_keyword_rule_with_zero_threshold_admits_all() {
        let def = CollectionDefinition::with_rule(
            Collection::new("all", "All", Vec::<String>::new()),
            ScoringRule::new(KeywordSet::default(), 0),
        );
        let corpus = corpus(&[("b", "x"), ("a", "y")]);
        assert_eq!(resolve(&[def], &corpus)[0].episode_slugs, vec!["a", "b"]);
    }
}
