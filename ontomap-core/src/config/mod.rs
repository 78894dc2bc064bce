//! Configuration types for ontomap

use crate::OntomapError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolution: ResolutionConfig,
    #[serde(default)]
    pub records: RecordsConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Ceiling for every tree walk (ancestor chains, descendants, neighborhood rounds)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Replace ambiguous/unmappable results with their closest common ancestor
    #[serde(default = "default_auto_resolve")]
    pub auto_resolve: bool,
    /// Codes copied through without resolution (blank is always passed through)
    #[serde(default = "default_passthrough_codes")]
    pub passthrough_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    #[serde(default = "default_code_column")]
    pub code_column: String,
    #[serde(default = "default_options_suffix")]
    pub options_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Directory of `<version>.json` tree files; takes precedence over the API
    #[serde(default)]
    pub tree_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_format")]
    pub format: String,
    #[serde(default = "default_website_url")]
    pub website_url: String,
}

// Default value functions
fn default_max_depth() -> usize { 64 }
fn default_auto_resolve() -> bool { false }
fn default_passthrough_codes() -> Vec<String> { vec!["NA".to_string()] }
fn default_code_column() -> String { "ONCOTREE_CODE".to_string() }
fn default_options_suffix() -> String { "_OPTIONS".to_string() }
fn default_api_url() -> String { "http://oncotree.mskcc.org/api/".to_string() }
fn default_timeout_secs() -> u64 { 30 }
fn default_report_format() -> String { "html".to_string() }
fn default_website_url() -> String { "http://oncotree.mskcc.org/#/home?version=".to_string() }

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            auto_resolve: default_auto_resolve(),
            passthrough_codes: default_passthrough_codes(),
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            code_column: default_code_column(),
            options_suffix: default_options_suffix(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            tree_dir: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_report_format(),
            website_url: default_website_url(),
        }
    }
}

impl RecordsConfig {
    /// Name of the column that carries unresolved options
    pub fn options_column(&self) -> String {
        format!("{}{}", self.code_column, self.options_suffix)
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, OntomapError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| OntomapError::Configuration(format!("Failed to parse config: {}", e)))?;
    if config.resolution.max_depth == 0 {
        return Err(OntomapError::Configuration(
            "resolution.max_depth must be at least 1".to_string(),
        ));
    }
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), OntomapError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| OntomapError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
