//! Error types.
//!
//! Each subsystem has its own error enum; they all fold into [`Error`] so the
//! drivers can match on the failure and attach a hint.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("{failed} of {total} secrets failed to push")]
    PushFailed { failed: usize, total: usize },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration and precondition errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("GitHub token required")]
    MissingToken,

    #[error("repository required")]
    MissingRepository,

    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepository(String),
}

/// Errors working with the local `.env` file.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Sealed-box encryption errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid base64 in public key")]
    InvalidBase64,

    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("sealed box encryption failed")]
    SealFailed,
}

/// Errors talking to the remote secrets store.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("GitHub CLI (gh) not installed")]
    ToolNotFound,

    #[error("GitHub CLI not authenticated")]
    NotAuthenticated,

    #[error("gh secret {action} failed: {stderr}")]
    CommandFailed { action: String, stderr: String },

    #[error("GitHub API returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Suggested next step for the user, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError::MissingToken) => {
                Some("pass --token or set GITHUB_TOKEN (https://github.com/settings/tokens, scope: repo)")
            }
            Error::Config(ConfigError::MissingRepository) => {
                Some("use --repo owner/name or run inside a clone with a GitHub origin remote")
            }
            Error::Remote(RemoteError::ToolNotFound) => Some("install it from https://cli.github.com"),
            Error::Remote(RemoteError::NotAuthenticated) => Some("run: gh auth login"),
            Error::Env(EnvError::NotFound(_)) => Some("run: envseal generate"),
            _ => None,
        }
    }
}
