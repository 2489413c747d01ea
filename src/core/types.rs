//! Type definitions for envseal.
//!
//! Small value types shared between the validator, the env file model and
//! the remote clients.

use serde::Deserialize;
use zeroize::Zeroizing;

/// A secret name (e.g., "DATABASE_URL").
pub type SecretName = String;

/// A plaintext secret value, wiped from memory on drop.
pub type SecretValue = Zeroizing<String>;

/// A name/value pair headed for the remote store.
#[derive(Debug, Clone)]
pub struct SecretEntry {
    pub name: SecretName,
    pub value: SecretValue,
}

impl SecretEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
        }
    }
}

/// A repository's Actions public key, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemotePublicKey {
    /// Version identifier sent back with every upsert
    pub key_id: String,
    /// Base64-encoded Curve25519 public key
    pub key: String,
}

/// Outcome of pushing a batch of secrets.
#[derive(Debug, Default, Clone)]
pub struct PushSummary {
    /// Number of secrets stored remotely
    pub pushed: usize,
    /// Names that failed to push
    pub failed: Vec<SecretName>,
}

impl PushSummary {
    /// Number of secrets attempted.
    pub fn attempted(&self) -> usize {
        self.pushed + self.failed.len()
    }

    /// Whether every attempted push succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
