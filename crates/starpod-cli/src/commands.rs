//! Command implementations for the starpod driver.
//!
//! Handles:
//! - analyze: LLM matches, topic suggestions and collection previews
//! - collections: resolved collection membership as JSON
//! - score: score one file against a topic or ad-hoc keywords
//! - topics: list the keyword registry

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use starpod_collections::{load_baselines, resolve, CollectionRules};
use starpod_corpus::{load_episodes, Corpus};
use starpod_topics::{KeywordRegistry, ScoringMode};
use starpod_types::{Collection, KeywordSet, Settings};

use crate::report::AnalysisReport;

/// CLI-level overrides applied on top of loaded settings.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Log level
    pub log_level: Option<String>,
    /// Transcript directory
    pub transcripts_dir: Option<String>,
    /// Episode metadata file
    pub episodes_path: Option<String>,
    /// Collection baseline file
    pub collections_path: Option<String>,
}

/// Load configuration and apply CLI overrides (highest precedence).
pub fn load_settings(config_path: Option<&str>, overrides: Overrides) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;

    if let Some(level) = overrides.log_level {
        settings.log_level = level;
    }
    if let Some(dir) = overrides.transcripts_dir {
        settings.transcripts_dir = dir;
    }
    if let Some(path) = overrides.episodes_path {
        settings.episodes_path = path;
    }
    if let Some(path) = overrides.collections_path {
        settings.collections_path = path;
    }
    Ok(settings)
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Load episode metadata and transcripts into a corpus.
pub fn load_corpus(settings: &Settings) -> Result<Corpus> {
    let episodes_path = settings.expanded_episodes_path();
    let episodes = load_episodes(&episodes_path)
        .with_context(|| format!("Failed to load episodes from {}", episodes_path.display()))?;

    let corpus = Corpus::load(&settings.expanded_transcripts_dir(), &episodes);
    for issue in corpus.issues().iter().filter(|i| i.is_read_failure()) {
        warn!("Skipped transcript: {}", issue);
    }
    Ok(corpus)
}

/// Build the analysis report and write it as text or JSON.
pub fn run_analyze(
    settings: &Settings,
    json: bool,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let corpus = load_corpus(settings)?;
    info!("Analyzing {} transcripts", corpus.len());

    let report = AnalysisReport::build(
        corpus.entries(),
        KeywordRegistry::builtin(),
        &settings.discovery,
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write report")?;
        writeln!(out)?;
    } else {
        let limit = limit.unwrap_or(settings.discovery.report_limit);
        report
            .write_text(out, limit)
            .context("Failed to write report")?;
    }
    Ok(())
}

/// Resolve collection membership from the configured baselines.
pub fn resolve_collections(settings: &Settings, corpus: &Corpus) -> Result<Vec<Collection>> {
    let path = settings.expanded_collections_path();
    let baselines = load_baselines(&path)
        .with_context(|| format!("Failed to load collections from {}", path.display()))?;

    let rules = CollectionRules::builtin(KeywordRegistry::builtin());
    let definitions = rules.attach(baselines);
    Ok(resolve(&definitions, &corpus.text_by_slug()))
}

/// Resolve collections and write them as JSON.
pub fn run_collections(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let corpus = load_corpus(settings)?;
    let collections = resolve_collections(settings, &corpus)?;
    serde_json::to_writer_pretty(&mut *out, &collections)
        .context("Failed to write collections")?;
    writeln!(out)?;
    Ok(())
}

/// Score one file against a registry topic or explicit keywords.
pub fn run_score(
    file: &Path,
    topic: Option<&str>,
    keywords: &[String],
    mode: ScoringMode,
    out: &mut impl Write,
) -> Result<()> {
    let keywords = KeywordRegistry::builtin()
        .select(topic, keywords)
        .context("Provide --topic or at least one --keywords phrase")?;

    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let score = mode.score(&text, &keywords);
    writeln!(out, "{}", score)?;
    Ok(())
}

/// List registry topics with their keyword counts.
pub fn run_topics(out: &mut impl Write) -> Result<()> {
    let registry = KeywordRegistry::builtin();
    for id in registry.ids() {
        let count = registry.get(id).map(KeywordSet::len).unwrap_or(0);
        writeln!(out, "{:<20} {} keywords", id, count)?;
    }
    Ok(())
}
