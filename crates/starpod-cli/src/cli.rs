//! CLI argument parsing for the starpod reporting driver.
//!
//! CLI flags override all other config sources.

use clap::{Parser, Subcommand, ValueEnum};

use starpod_topics::ScoringMode;

/// Starpod transcript analysis
///
/// Scores podcast transcripts against topic keywords, suggests new
/// collections and resolves curated collection membership.
#[derive(Parser, Debug)]
#[command(name = "starpod")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default <config dir>/starpod/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Override the transcript directory
    #[arg(long, global = true)]
    pub transcripts_dir: Option<String>,

    /// Override the episode metadata file
    #[arg(long, global = true)]
    pub episodes: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Driver commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report LLM matches, suggested collections and collection previews
    Analyze {
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,

        /// Maximum suggestions in the text report
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Resolve collection membership and print it as JSON
    Collections {
        /// Override the collection baseline file
        #[arg(long)]
        collections: Option<String>,
    },

    /// Score a single text file
    Score {
        /// File to score
        file: String,

        /// Registry topic to score against
        #[arg(short, long, conflicts_with = "keywords")]
        topic: Option<String>,

        /// Comma-separated keyword phrases
        #[arg(short, long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Scoring mode
        #[arg(short, long, value_enum, default_value_t = ModeArg::Simple)]
        mode: ModeArg,
    },

    /// List registry topics
    Topics,
}

/// Scoring mode as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Substring occurrences only
    Simple,
    /// Substring occurrences plus whole-word frequency
    Frequency,
}

impl From<ModeArg> for ScoringMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Simple => ScoringMode::Simple,
            ModeArg::Frequency => ScoringMode::FrequencyAugmented,
        }
    }
}
