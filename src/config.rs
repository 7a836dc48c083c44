/// Run configuration loaded from an optional `penguin_stats.toml`.
///
/// Every key has a default, so a missing file is not an error. A file that
/// exists but does not parse is.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::logging::LogLevel;
use crate::model::PenguinsError;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "penguin_stats.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// species,sex,avg_body_mass_g,n
    pub avg_mass_csv: PathBuf,
    /// island,species,avg_body_mass_g,n
    pub heaviest_csv: PathBuf,
    /// Human-readable summary of both result sets.
    pub summary_txt: PathBuf,
    /// JSON run report; not written when absent.
    pub report_json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            avg_mass_csv: PathBuf::from("results_avg_mass.csv"),
            heaviest_csv: PathBuf::from("results_heaviest.csv"),
            summary_txt: PathBuf::from("results_summary.txt"),
            report_json: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: None,
            timestamps: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, PenguinsError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses `path`. Fails if the file is missing.
    pub fn load(path: &Path) -> Result<Self, PenguinsError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, PenguinsError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
