//! Roster configuration file.
//!
//! ```toml
//! [source]
//! location = "https://example.com/members.json"
//! timeout_secs = 30
//!
//! [roster]
//! filter_policy = "reapply"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use roster_core::FilterPolicy;
use roster_ingest::{DEFAULT_TIMEOUT, LoadOptions, RosterSource};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub roster: RosterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL or file path; the public member list when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub filter_policy: FilterPolicy,
}

impl Config {
    /// Load an explicit config file, or `./roster.toml` when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any file fails to parse.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load settings from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or sets a
    /// zero timeout.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.source.timeout_secs == 0 {
            bail!("source.timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Resolve the roster source, preferring `override_location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen location is blank.
    pub fn source(&self, override_location: Option<&str>) -> Result<RosterSource> {
        match override_location.or(self.source.location.as_deref()) {
            Some(location) => location
                .parse()
                .with_context(|| format!("invalid roster source {location:?}")),
            None => Ok(RosterSource::default()),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            timeout: Duration::from_secs(self.source.timeout_secs),
        }
    }
}
