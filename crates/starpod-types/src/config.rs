//! Configuration loading for starpod.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at `<config dir>/starpod/config.toml`.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::StarpodError;

/// Settings for the topic discovery report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySettings {
    /// Minimum candidates for a topic to be suggested as a collection.
    #[serde(default = "default_min_episodes")]
    pub min_episodes: usize,

    /// Episodes listed per suggestion.
    #[serde(default = "default_top_episodes")]
    pub top_episodes: usize,

    /// Suggestions printed by the text report.
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,

    /// Matches printed for the LLM collection pass.
    #[serde(default = "default_llm_top_matches")]
    pub llm_top_matches: usize,
}

fn default_min_episodes() -> usize {
    3
}

fn default_top_episodes() -> usize {
    5
}

fn default_report_limit() -> usize {
    10
}

fn default_llm_top_matches() -> usize {
    10
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            min_episodes: default_min_episodes(),
            top_episodes: default_top_episodes(),
            report_limit: default_report_limit(),
            llm_top_matches: default_llm_top_matches(),
        }
    }
}

impl DiscoverySettings {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_episodes == 0 {
            return Err("min_episodes must be > 0".to_string());
        }
        if self.top_episodes == 0 {
            return Err("top_episodes must be > 0".to_string());
        }
        Ok(())
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding `<episode number>.md` transcripts
    #[serde(default = "default_transcripts_dir")]
    pub transcripts_dir: String,

    /// JSON file with the episode records from feed ingestion
    #[serde(default = "default_episodes_path")]
    pub episodes_path: String,

    /// TOML or JSON file with the curated collection baselines
    #[serde(default = "default_collections_path")]
    pub collections_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Discovery report settings
    #[serde(default)]
    pub discovery: DiscoverySettings,
}

fn default_transcripts_dir() -> String {
    "src/content/transcripts".to_string()
}

fn default_episodes_path() -> String {
    "episodes.json".to_string()
}

fn default_collections_path() -> String {
    "collections.toml".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transcripts_dir: default_transcripts_dir(),
            episodes_path: default_episodes_path(),
            collections_path: default_collections_path(),
            log_level: default_log_level(),
            discovery: DiscoverySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (`<config dir>/starpod/config.toml`)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (STARPOD_*, nested keys use `__`)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, StarpodError> {
        let config_dir = ProjectDirs::from("", "", "starpod")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");
        let discovery = DiscoverySettings::default();

        let mut builder = Config::builder()
            .set_default("transcripts_dir", default_transcripts_dir())
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("episodes_path", default_episodes_path())
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("collections_path", default_collections_path())
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("discovery.min_episodes", discovery.min_episodes as i64)
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("discovery.top_episodes", discovery.top_episodes as i64)
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("discovery.report_limit", discovery.report_limit as i64)
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .set_default("discovery.llm_top_matches", discovery.llm_top_matches as i64)
            .map_err(|e| StarpodError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: STARPOD_LOG_LEVEL, STARPOD_DISCOVERY__MIN_EPISODES, etc.
        builder = builder.add_source(
            Environment::with_prefix("STARPOD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| StarpodError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| StarpodError::Config(e.to_string()))?;

        settings.discovery.validate().map_err(StarpodError::Config)?;
        Ok(settings)
    }

    /// Transcript directory with `~` expanded.
    pub fn expanded_transcripts_dir(&self) -> PathBuf {
        expand_path(&self.transcripts_dir)
    }

    /// Episode metadata path with `~` expanded.
    pub fn expanded_episodes_path(&self) -> PathBuf {
        expand_path(&self.episodes_path)
    }

    /// Collection baseline path with `~` expanded.
    pub fn expanded_collections_path(&self) -> PathBuf {
        expand_path(&self.collections_path)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.transcripts_dir, "src/content/transcripts");
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.discovery.min_episodes, 3);
        assert_eq!(settings.discovery.top_episodes, 5);
    }

    #[test]
    fn test_load_with_config_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "transcripts_dir = \"/data/transcripts\"\n[discovery]\nreport_limit = 4\nfloor = 10"
        )
        .unwrap();

        let settings = Settings::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(settings.transcripts_dir, "/data/transcripts");
        assert_eq!(settings.discovery.report_limit, 4);
        // The discovery floor is not configurable
        let discovery = serde_json::to_value(&settings.discovery).unwrap();
        assert!(discovery.get("floor").is_none());
    }

    #[test]
    fn test_discovery_validation() {
        let mut discovery = DiscoverySettings::default();
        assert!(discovery.validate().is_ok());

        discovery.min_episodes = 0;
        assert!(discovery.validate().is_err());
    }

    #[test]
    fn test_expanded_paths_keep_relative() {
        let settings = Settings::default();
        assert_eq!(
            settings.expanded_transcripts_dir(),
            PathBuf::from("src/content/transcripts")
        );
    }
}
