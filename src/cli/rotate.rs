//! Rotate command - replace a secret in the env file, keeping a backup.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::env::EnvFile;
use crate::core::generator;
use crate::error::Result;

/// Copy `env_file` to `{file}.backup.{stamp}`, never replacing an existing
/// file.
///
/// A taken name gets a numeric suffix (`.1`, `.2`, ...). The copy is created
/// with 0600 permissions on unix.
fn write_backup(env_file: &Path, stamp: &str) -> Result<PathBuf> {
    let contents = fs::read(env_file)?;
    let base = format!("{}.backup.{}", env_file.display(), stamp);

    let mut attempt = 0u32;
    loop {
        let candidate = if attempt == 0 {
            PathBuf::from(&base)
        } else {
            PathBuf::from(format!("{}.{}", base, attempt))
        };

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        match options.open(&candidate) {
            Ok(mut file) => {
                file.write_all(&contents)?;
                file.sync_all()?;
                debug!(path = %candidate.display(), "wrote backup");
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Rotate `key` in `env_file`.
///
/// The old file is copied byte-for-byte to a new timestamped backup, then the
/// new content replaces the live file with an atomic rename. Every line other
/// than the rotated key is kept verbatim. Returns the backup path.
pub fn rotate_file(env_file: &Path, key: &str) -> Result<PathBuf> {
    let mut env = EnvFile::load(env_file)?;

    let secret = Zeroizing::new(generator::auth_secret());
    env.set(key, &secret)?;

    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let backup = write_backup(env_file, &stamp)?;
    env.save()?;

    Ok(backup)
}

/// Execute secret rotation.
pub fn execute(env_file: &Path, key: &str) -> Result<()> {
    info!(path = %env_file.display(), %key, "rotating secret");

    let backup = output::step(&format!("rotating {}", key), || rotate_file(env_file, key))?;

    output::success(&format!("backed up to {}", output::path(backup.display())));
    output::success(&format!(
        "rotated {} in {}",
        output::key(key),
        output::path(env_file.display())
    ));
    output::warn("remember to restart your application");
    output::hint(&format!(
        "update the remote copy with {}",
        output::cmd("envseal github-push")
    ));

    Ok(())
}
