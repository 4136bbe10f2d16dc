//! Starpod transcript analysis
//!
//! # Usage
//!
//! ```bash
//! starpod analyze [--json] [--limit N]
//! starpod collections [--collections PATH]
//! starpod score FILE (--topic ID | --keywords a,b) [--mode simple|frequency]
//! starpod topics
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/starpod/config.toml)
//! 3. Environment variables (STARPOD_*)
//! 4. CLI flags

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use starpod_cli::{
    init_logging, load_settings, run_analyze, run_collections, run_score, run_topics, Cli,
    Commands, Overrides,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let collections_path = match &cli.command {
        Commands::Collections { collections } => collections.clone(),
        _ => None,
    };
    let settings = load_settings(
        cli.config.as_deref(),
        Overrides {
            log_level: cli.log_level,
            transcripts_dir: cli.transcripts_dir,
            episodes_path: cli.episodes,
            collections_path,
        },
    )?;
    init_logging(&settings.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze { json, limit } => {
            run_analyze(&settings, json, limit, &mut out)?;
        }
        Commands::Collections { .. } => {
            run_collections(&settings, &mut out)?;
        }
        Commands::Score {
            file,
            topic,
            keywords,
            mode,
        } => {
            run_score(
                Path::new(&file),
                topic.as_deref(),
                &keywords,
                mode.into(),
                &mut out,
            )?;
        }
        Commands::Topics => {
            run_topics(&mut out)?;
        }
    }

    Ok(())
}
