//! # starpod-collections
//!
//! Curated episode collections, augmented by transcript keyword scoring.
//!
//! A collection's membership is its hand-maintained baseline plus every
//! transcript that clears the collection's scoring rule. Collections
//! without a rule are emitted exactly as curated.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use starpod_collections::{resolve, CollectionRules};
//! use starpod_collections::baseline::BaselineCollection;
//! use starpod_topics::KeywordRegistry;
//! use starpod_types::Collection;
//!
//! let rules = CollectionRules::builtin(KeywordRegistry::builtin());
//! let baselines = vec![BaselineCollection::new(
//!     Collection::new("css", "CSS", ["container-queries"]),
//!     None,
//! )];
//! let mut corpus = BTreeMap::new();
//! corpus.insert(
//!     "tailwind-v4".to_string(),
//!     "Tailwind and CSS, more CSS, and Sass".to_string(),
//! );
//!
//! let resolved = resolve(&rules.attach(baselines), &corpus);
//! assert_eq!(resolved[0].episode_slugs, vec!["container-queries", "tailwind-v4"]);
//! ```

pub mod baseline;
pub mod error;
pub mod resolver;
pub mod rules;

pub use baseline::{load_baselines, BaselineCollection};
pub use error::CollectionsError;
pub use resolver::resolve;
pub use rules::{CollectionRules, BUILTIN_THRESHOLDS};
