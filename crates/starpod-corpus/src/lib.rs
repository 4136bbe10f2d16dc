//! # starpod-corpus
//!
//! Builds the transcript corpus consumed by topic discovery and collection
//! resolution.
//!
//! Inputs are the episode records produced by feed ingestion and a
//! directory of `<episode number>.md` transcripts. Transcripts without a
//! numeric episode record, and files that cannot be read, are skipped and
//! reported as [`CorpusIssue`]s; loading a corpus never fails because of a
//! single transcript.

pub mod corpus;
pub mod episodes;
pub mod error;
pub mod issue;
pub mod transcripts;

pub use corpus::Corpus;
pub use episodes::{load_episodes, parse_episodes};
pub use error::CorpusError;
pub use issue::CorpusIssue;
pub use transcripts::{Transcript, TranscriptStore, TRANSCRIPT_EXTENSION};
