//! Optional TOML configuration (`scorebands.toml`).
//!
//! Carries exclusion globs for the report-file walk and the band labels.
//! The marker count everywhere is `labels + 1`, so a config with a
//! different label count reshapes the whole partition. A missing file is
//! not an error; a file that exists but does not parse is.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::partition::DEFAULT_LABELS;

/// Default config file name, looked up in the target directory.
pub const CONFIG_FILE: &str = "scorebands.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Glob patterns excluded from the report-file walk.
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub bands: BandsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BandsConfig {
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
}

fn default_labels() -> Vec<String> {
    DEFAULT_LABELS.iter().map(|l| l.to_string()).collect()
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            bands: BandsConfig::default(),
        }
    }
}

impl Config {
    pub fn labels(&self) -> &[String] {
        &self.bands.labels
    }

    /// Markers needed to delimit the configured bands.
    pub fn marker_count(&self) -> usize {
        self.bands.labels.len() + 1
    }

    fn parse(text: &str) -> Result<Self, Box<dyn Error>> {
        let config: Config = toml::from_str(text)?;
        if config.bands.labels.is_empty() {
            return Err("bands.labels must not be empty".into());
        }
        Ok(config)
    }
}

/// Load configuration: an explicit `--config` path must exist; otherwise
/// `scorebands.toml` next to the target is used when present, and the
/// defaults when not.
pub fn load(explicit: Option<&Path>, target: &Path) -> Result<Config, Box<dyn Error>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("{}: {e}", path.display()))?;
        return Config::parse(&text);
    }

    let dir = if target.is_dir() {
        target
    } else {
        target.parent().unwrap_or(Path::new("."))
    };
    let path = dir.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(text) => Config::parse(&text),
        Err(_) => Ok(Config::default()),
    }
}
