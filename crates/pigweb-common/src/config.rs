//! Configuration loading for PigWeb.
//! Reads pigweb.toml from the current directory or the path in PIGWEB_CONFIG.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PigwebError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gene_lookup: GeneLookupConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String { "0.0.0.0:3000".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// NCBI gene lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneLookupConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    /// Organism filter appended to every esearch term.
    #[serde(default = "default_organism")]
    pub organism: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub api_key: Option<String>,
}

fn bool_true()            -> bool   { true }
fn default_organism()     -> String { "sus scrofa".to_string() }
fn default_timeout_secs() -> u64    { 15 }

impl Default for GeneLookupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            organism: default_organism(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_title")]
    pub title: String,
}

fn default_report_title() -> String { "MATE-PIGWEB25 Pig — Ethical Evaluation".to_string() }

impl Default for ReportConfig {
    fn default() -> Self {
        Self { title: default_report_title() }
    }
}

impl AppConfig {
    /// Load configuration from pigweb.toml.
    /// Checks PIGWEB_CONFIG env var first, then current directory.
    pub fn load() -> Result<Self> {
        let path = std::env::var("PIGWEB_CONFIG")
            .unwrap_or_else(|_| "pigweb.toml".to_string());
        let mut config = Self::load_from(&path)?;

        if let Ok(bind) = std::env::var("PIGWEB_BIND") {
            config.server.bind = bind;
        }
        Ok(config)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| PigwebError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PigwebError::Config(e.to_string()))
    }
}
