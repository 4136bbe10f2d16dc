//! Starpod reporting driver library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (analyze, collections, score, topics)
//! - `report`: Analysis report assembly and rendering

pub mod cli;
pub mod commands;
pub mod report;

pub use cli::{Cli, Commands, ModeArg};
pub use commands::{
    init_logging, load_corpus, load_settings, resolve_collections, run_analyze, run_collections,
    run_score, run_topics, Overrides,
};
pub use report::{AnalysisReport, EpisodeScore, LlmReport, SuggestionSummary};
