//! Environment file validation.
//!
//! Checks a `.env` file for required keys, blank required values and
//! secrets that are too short to be safe.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::core::constants;
use crate::core::env::EnvFile;
use crate::error::Result;

/// Which keys are checked and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Keys that must appear with a non-blank value
    pub required: Vec<String>,
    /// Keys reported when unset
    pub optional: Vec<String>,
    /// Minimum value length (in characters) per key
    pub min_length: BTreeMap<String, usize>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            required: constants::REQUIRED_KEYS.iter().map(|k| k.to_string()).collect(),
            optional: constants::OPTIONAL_KEYS.iter().map(|k| k.to_string()).collect(),
            min_length: BTreeMap::from([(
                constants::AUTH_SECRET_KEY.to_string(),
                constants::AUTH_SECRET_MIN_LENGTH,
            )]),
        }
    }
}

/// Overall verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Valid,
    Invalid,
}

/// A secret shorter than its minimum length.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct WeakSecret {
    pub key: String,
    pub length: usize,
    pub minimum: usize,
}

impl fmt::Display for WeakSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (too short: {} chars)", self.key, self.length)
    }
}

/// Result of validating one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub file_exists: bool,
    pub missing_required: BTreeSet<String>,
    pub empty_values: BTreeSet<String>,
    pub weak_secrets: Vec<WeakSecret>,
    pub unset_optional: BTreeSet<String>,
    pub status: ValidationStatus,
}

impl ValidationReport {
    fn missing_file() -> Self {
        Self {
            file_exists: false,
            missing_required: BTreeSet::new(),
            empty_values: BTreeSet::new(),
            weak_secrets: Vec::new(),
            unset_optional: BTreeSet::new(),
            status: ValidationStatus::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }

    /// Whether a weak secret was reported for `key`.
    pub fn is_weak(&self, key: &str) -> bool {
        self.weak_secrets.iter().any(|w| w.key == key)
    }
}

/// Validates `.env` files against a fixed set of rules.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentValidator {
    rules: ValidationRules,
}

impl EnvironmentValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate the file at `path`.
    ///
    /// A missing file is reported, not returned as an error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn validate(&self, path: impl AsRef<Path>) -> Result<ValidationReport> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "env file missing");
            return Ok(ValidationReport::missing_file());
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(self.validate_str(&contents))
    }

    /// Validate dotenv text directly.
    pub fn validate_str(&self, contents: &str) -> ValidationReport {
        let env = EnvFile::parse(contents, constants::ENV_FILE);

        // Presence is checked against the raw text, so a commented-out key
        // still counts as present.
        let missing_required: BTreeSet<String> = self
            .rules
            .required
            .iter()
            .filter(|key| !contents.contains(key.as_str()))
            .cloned()
            .collect();

        let mut empty_values = BTreeSet::new();
        let mut weak_secrets = Vec::new();

        for (key, value) in env.entries() {
            let value = value.trim();

            if value.is_empty() {
                if self.rules.required.iter().any(|k| k == key) {
                    empty_values.insert(key.to_string());
                }
                continue;
            }

            if let Some(&minimum) = self.rules.min_length.get(key) {
                let length = value.chars().count();
                if length < minimum {
                    weak_secrets.push(WeakSecret {
                        key: key.to_string(),
                        length,
                        minimum,
                    });
                }
            }
        }
        weak_secrets.dedup();

        let unset_optional = self
            .rules
            .optional
            .iter()
            .filter(|key| {
                !env.entries()
                    .any(|(k, v)| k == key.as_str() && !v.trim().is_empty())
            })
            .cloned()
            .collect();

        let status = if missing_required.is_empty() && empty_values.is_empty() {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        };

        debug!(
            missing = missing_required.len(),
            empty = empty_values.len(),
            weak = weak_secrets.len(),
            "validated env"
        );

        ValidationReport {
            file_exists: true,
            missing_required,
            empty_values,
            weak_secrets,
            unset_optional,
            status,
        }
    }
}
