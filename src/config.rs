//! Startup configuration.
//!
//! Configuration is read once from an optional YAML file and never changes
//! afterwards. Every key is optional:
//! - `base_url`: listing endpoint (default `https://randomuser.me/api`)
//! - `results`: batch size (default 12)
//! - `fields`: fields requested through `inc`; `name` and `email` are required

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};
use crate::types::{DEFAULT_BASE_URL, DEFAULT_BATCH_SIZE, Field};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the people listing endpoint
    pub base_url: String,

    /// Number of people fetched in the single startup batch
    pub results: u32,

    /// Fields requested from the endpoint
    pub fields: Vec<Field>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            results: DEFAULT_BATCH_SIZE,
            fields: Field::defaults(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml_ng::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce a usable request.
    pub fn validate(&self) -> Result<()> {
        if self.results == 0 {
            return Err(RosterError::Config(
                "results must be at least 1".to_string(),
            ));
        }
        if self.fields.is_empty() {
            return Err(RosterError::Config(
                "fields must name at least one field".to_string(),
            ));
        }
        for required in [Field::Name, Field::Email] {
            if !self.fields.contains(&required) {
                return Err(RosterError::Config(format!(
                    "fields must include '{}'",
                    required
                )));
            }
        }
        if self.base_url.trim().is_empty() {
            return Err(RosterError::Config("base_url cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
