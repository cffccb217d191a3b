//! Interpreter configuration.
//!
//! Loaded from an optional TOML file. Every field has a default, so an
//! empty file (or no file at all) yields [`Config::default`].

use crate::common::SimError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub report: ReportConfig,
}

impl Config {
    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, SimError> {
        let content = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SimError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print one trace line per executed step.
    pub trace_instructions: bool,

    /// Stop after this many steps. `None` runs until the program counter
    /// leaves the program, which may be never.
    pub max_steps: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub registers: bool,
    pub memory: bool,
    pub stats: bool,
    /// Also print the instruction-mix breakdown.
    pub breakdown: bool,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            registers: true,
            memory: true,
            stats: true,
            breakdown: false,
            format: ReportFormat::Text,
        }
    }
}

/// Output format of the final-state report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}
