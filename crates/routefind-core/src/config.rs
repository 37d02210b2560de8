//! Configuration for routefind
//!
//! Stored as TOML. Looked up from an explicit `--config` path, then
//! `$ROUTEFIND_CONFIG_DIR/config.toml`, then `~/.config/routefind/config.toml`.
//! A missing default file means built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, RouteError};
use crate::ingest::IngestOptions;

pub use types::{Config, GraphConfig, IngestConfig, OutputConfig};

const CONFIG_DIR: &str = "routefind";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROUTEFIND_CONFIG_DIR";

impl Config {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load the configuration for this invocation.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded_config");
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RouteError::io_operation("create config directory", parent.display(), e)
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| RouteError::FailedOperation {
            operation: "serialize config".to_string(),
            reason: e.to_string(),
        })?;

        fs::write(path, content)
            .map_err(|e| RouteError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Reject settings that would make edge files unparseable
    pub fn validate(&self) -> Result<()> {
        let delimiter = self.ingest.delimiter;
        if delimiter.is_ascii_digit() || delimiter.is_whitespace() || delimiter == '-' {
            bail_invalid!("ingest.delimiter", format!("{:?}", delimiter));
        }
        Ok(())
    }

    pub fn ingest_options(&self) -> IngestOptions {
        IngestOptions {
            delimiter: self.ingest.delimiter,
        }
    }
}
