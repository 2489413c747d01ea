//! `.env` file model.
//!
//! Parses a dotenv file into lines so that a single key can be changed and
//! the file written back with every other line (comments, blanks, ordering)
//! kept verbatim.

use std::fmt;
#[cfg(unix)]
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EnvError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Entry {
        key: String,
        value: String,
        raw: String,
    },
    Other(String),
}

impl Line {
    fn raw(&self) -> &str {
        match self {
            Line::Entry { raw, .. } => raw,
            Line::Other(raw) => raw,
        }
    }
}

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct EnvFile {
    lines: Vec<Line>,
    path: PathBuf,
    trailing_newline: bool,
}

impl EnvFile {
    /// Read and parse an .env file from disk.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::NotFound` if the file does not exist, or an I/O
    /// error if it cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EnvError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path)?;
        let env = Self::parse(&contents, path);
        debug!(path = %path.display(), entries = env.len(), "loaded env file");
        Ok(env)
    }

    /// Parse dotenv text.
    ///
    /// Comments and blank lines are kept as-is so the file can be written
    /// back unchanged. Supports values with or without quotes.
    pub fn parse(contents: &str, path: impl Into<PathBuf>) -> Self {
        let trailing_newline = contents.ends_with('\n');
        let body = contents.strip_suffix('\n').unwrap_or(contents);

        let lines = if contents.is_empty() {
            Vec::new()
        } else {
            body.split('\n').map(parse_line).collect()
        };

        Self {
            lines,
            path: path.into(),
            trailing_newline,
        }
    }

    /// Get a value by key (first occurrence)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Whether any entry has this key
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries in file order, duplicates included
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Entry { key, value, .. } => Some((key.as_str(), value.as_str())),
            Line::Other(_) => None,
        })
    }

    /// Unique key/value pairs: first position wins, last value wins.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in self.entries() {
            match pairs.iter_mut().find(|(k, _)| k.as_str() == key) {
                Some(existing) => existing.1 = value.to_string(),
                None => pairs.push((key.to_string(), value.to_string())),
            }
        }
        pairs
    }

    /// Set a key, replacing its first entry in place.
    ///
    /// Later duplicates of the key are dropped; a missing key is appended.
    /// Values containing line breaks are rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        if value.contains(['\n', '\r']) {
            return Err(EnvError::InvalidValue {
                key: key.to_string(),
                reason: "line breaks cannot be stored on one line".to_string(),
            }
            .into());
        }

        let replacement = Line::Entry {
            key: key.to_string(),
            value: value.to_string(),
            raw: format_entry(key, value),
        };

        let mut replaced = false;
        self.lines.retain_mut(|line| {
            if !matches!(line, Line::Entry { key: k, .. } if k.as_str() == key) {
                return true;
            }
            if replaced {
                return false;
            }
            *line = replacement.clone();
            replaced = true;
            true
        });

        if !replaced {
            self.lines.push(replacement);
            self.trailing_newline = true;
        }

        Ok(())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the file back to its path.
    ///
    /// The content goes to a sibling temp file first and is renamed over the
    /// target, so a reader never sees a partial file. Permissions are 0600.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        write_atomic(&self.path, &self.to_string())
    }
}

impl fmt::Display for EnvFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .lines
            .iter()
            .map(Line::raw)
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&body)?;
        if self.trailing_newline && !self.lines.is_empty() {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Write `content` to `path` through a temp file and rename.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "env".to_string());
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(&tmp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        // Ensure secure permissions even when a stale temp file existed.
        std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(&tmp, content)?;
    }

    std::fs::rename(&tmp, path)?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Validate a secret key name.
///
/// Keys must be valid environment variable names: A-Z, a-z, 0-9 and
/// underscore, not starting with a digit.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = |reason: &str| EnvError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    match key.chars().next() {
        None => return Err(invalid("cannot be empty").into()),
        Some(c) if c.is_ascii_digit() => return Err(invalid("cannot start with a digit").into()),
        _ => {}
    }

    if let Some(ch) = key.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(invalid(&format!("invalid character '{}'", ch)).into());
    }

    Ok(())
}

fn parse_line(raw: &str) -> Line {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Line::Other(raw.to_string());
    }

    match line.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Entry {
            key: key.trim().to_string(),
            value: parse_env_value(value.trim()).to_string(),
            raw: raw.to_string(),
        },
        _ => Line::Other(raw.to_string()),
    }
}

/// Strip one pair of matching surrounding quotes. Nothing is unescaped:
/// the value is used exactly as written between the quotes.
fn parse_env_value(raw: &str) -> &str {
    let quoted = |q: char| raw.len() >= 2 && raw.starts_with(q) && raw.ends_with(q);

    if quoted('"') || quoted('\'') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}

/// Format a `KEY="value"` line that parses back to `value`.
pub fn format_entry(key: &str, value: &str) -> String {
    format!("{}=\"{}\"", key, value)
}
