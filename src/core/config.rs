//! Configuration file management.
//!
//! Reads the optional `.envseal.toml` project file. Every field is optional;
//! anything left out falls back to the defaults in [`constants`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::validation::ValidationRules;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.envseal.toml`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target repository and API endpoint
    pub github: GithubConfig,
    /// Overrides for the environment validator
    pub validation: ValidationConfig,
    /// Which keys are pushed
    pub push: PushConfig,
}

/// `[github]` section
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Repository in `owner/name` form
    pub repo: Option<String>,
    /// REST API base URL (GitHub Enterprise)
    pub api_url: Option<String>,
}

/// `[validation]` section
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub required: Option<Vec<String>>,
    pub optional: Option<Vec<String>>,
    /// Minimum value length per key
    pub min_length: Option<BTreeMap<String, usize>>,
}

/// `[push]` section
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PushConfig {
    /// Keys starting with any of these are never pushed
    pub exclude_prefixes: Option<Vec<String>>,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.envseal.toml` from the current directory, or defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read or is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path, or defaults if absent.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Validation rules with config overrides applied.
    pub fn rules(&self) -> ValidationRules {
        let mut rules = ValidationRules::default();
        if let Some(required) = &self.validation.required {
            rules.required = required.clone();
        }
        if let Some(optional) = &self.validation.optional {
            rules.optional = optional.clone();
        }
        if let Some(min_length) = &self.validation.min_length {
            rules.min_length = min_length.clone();
        }
        rules
    }

    /// Key prefixes excluded from pushes.
    pub fn exclude_prefixes(&self) -> Vec<String> {
        self.push.exclude_prefixes.clone().unwrap_or_else(|| {
            constants::PUBLIC_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect()
        })
    }

    /// API base URL: explicit value, then config file, then github.com.
    pub fn api_url(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| self.github.api_url.clone())
            .unwrap_or_else(|| constants::GITHUB_API_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Repository from the config file, if set.
    pub fn repo(&self) -> Option<&str> {
        self.github.repo.as_deref()
    }
}
