//! Optional TOML configuration file.
//!
//! ```toml
//! [search]
//! base = 16
//! max_results = 100
//!
//! [output]
//! format = "tsv"
//! ```
//!
//! Command-line flags and environment variables take precedence over
//! values from the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dgap::{Format, SearchParams};
use serde::Deserialize;
use tracing::{debug, info};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "dgap.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub search: SearchSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub base: Option<u32>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    pub format: Option<Format>,
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the explicit path, or the default file if one exists, or
    /// fall back to built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Base from the flag, then the file, then the built-in default
    pub fn base(&self, flag: Option<u32>) -> u32 {
        flag.or(self.search.base)
            .unwrap_or_else(|| SearchParams::default().base)
    }

    /// Output format from the flag, then the file, then the built-in default
    pub fn format(&self, flag: Option<Format>) -> Format {
        flag.or(self.output.format).unwrap_or_default()
    }
}
