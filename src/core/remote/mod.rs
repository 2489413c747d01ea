//! Remote secrets stores.
//!
//! A [`SecretsStore`] holds named, encrypted values scoped to one repository.
//! Two implementations exist:
//!
//! - **gh**: shells out to an authenticated GitHub CLI.
//! - **api**: calls the GitHub REST API directly, sealing each value with the
//!   repository's public key before upload.
//!
//! Both are synchronous and never retry.

use tracing::{debug, warn};

use crate::core::env::EnvFile;
use crate::core::types::{PushSummary, SecretEntry};
use crate::error::Result;

mod api;
mod gh;

pub use api::GithubApi;
pub use gh::GhCli;

/// A remote store of repository secrets.
pub trait SecretsStore {
    /// Short name for messages ("gh", "api").
    fn name(&self) -> &'static str;

    /// Create or overwrite a secret.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` carrying the upstream failure detail.
    fn set_secret(&mut self, name: &str, value: &str) -> Result<()>;

    /// Names of the secrets currently stored.
    fn list_secrets(&mut self) -> Result<Vec<String>>;

    /// Delete a secret without confirmation.
    fn delete_secret(&mut self, name: &str) -> Result<()>;
}

/// Entries from an env file that should be pushed.
///
/// Keys with an empty value or an excluded prefix are returned as skipped.
pub fn push_candidates(env: &EnvFile, exclude_prefixes: &[String]) -> (Vec<SecretEntry>, Vec<String>) {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (key, value) in env.pairs() {
        let excluded = exclude_prefixes.iter().any(|p| key.starts_with(p.as_str()));
        if value.is_empty() || excluded {
            debug!(%key, excluded, "skipping key");
            skipped.push(key);
        } else {
            entries.push(SecretEntry::new(key, value));
        }
    }

    (entries, skipped)
}

/// Push entries one at a time.
///
/// A failed item is reported through `on_result` and counted; it does not
/// stop the remaining items.
pub fn push_all<S, F>(store: &mut S, entries: &[SecretEntry], mut on_result: F) -> PushSummary
where
    S: SecretsStore + ?Sized,
    F: FnMut(&str, &Result<()>),
{
    let mut summary = PushSummary::default();

    for entry in entries {
        let result = store.set_secret(&entry.name, &entry.value);
        on_result(&entry.name, &result);
        match result {
            Ok(()) => summary.pushed += 1,
            Err(e) => {
                warn!(name = %entry.name, error = %e, "push failed");
                summary.failed.push(entry.name.clone());
            }
        }
    }

    summary
}
