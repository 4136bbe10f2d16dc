//! # starpod-types
//!
//! Shared domain types for the starpod transcript collections system.
//!
//! This crate defines the data structures passed between the loader, the
//! scorer and the collection resolver:
//! - Episodes: feed records and the transcript corpus built from them
//! - Keyword sets: normalized, case-insensitive phrase lists
//! - Collections: curated baselines and their optional scoring rules
//! - Roster: host/guest normalization for the seeding collaborator
//! - Settings: layered configuration
//!
//! ## Usage
//!
//! ```rust
//! use starpod_types::KeywordSet;
//!
//! let keywords = KeywordSet::new(["LLM", "rag"]);
//! assert_eq!(keywords.phrases(), ["llm", "rag"]);
//! ```

pub mod collection;
pub mod config;
pub mod episode;
pub mod error;
pub mod keywords;
pub mod roster;

pub use collection::{Collection, CollectionDefinition, ScoringRule};
pub use config::{DiscoverySettings, Settings};
pub use episode::{CorpusEntry, Episode};
pub use error::StarpodError;
pub use keywords::KeywordSet;
pub use roster::{host_guest_rows, HostGuestRow, HostRole, RosterEntry};
