//! Generate command.
//!
//! Writes a fresh `.env` template with a newly generated `AUTH_SECRET`.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use crate::cli::{output, prompt};
use crate::core::env::{format_entry, write_atomic};
use crate::core::{constants, generator};
use crate::error::Result;

/// Render the template for a given timestamp and auth secret.
pub fn template(generated_at: DateTime<Local>, auth_secret: &str) -> String {
    format!(
        r#"# Application environment configuration
# Generated: {generated}
# DO NOT commit this file to version control

# Database
DATABASE_URL="postgresql://postgres@localhost:5432/app?schema=public"

# Auth secret
{auth}

# OAuth providers (optional - add via GitHub secrets if needed)
# AUTH_GOOGLE_ID=""
# AUTH_GOOGLE_SECRET=""
# AUTH_GITHUB_ID=""
# AUTH_GITHUB_SECRET=""

# Resend email (optional)
# RESEND_API_KEY=""

# Application
NEXT_PUBLIC_APP_URL="http://localhost:3000"
"#,
        generated = generated_at.to_rfc3339(),
        auth = format_entry(constants::AUTH_SECRET_KEY, auth_secret),
    )
}

/// Whether the `.gitignore` next to `env_file` ignores it.
fn gitignore_covers(env_file: &Path) -> bool {
    let dir = env_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let Ok(contents) = std::fs::read_to_string(dir.join(".gitignore")) else {
        return false;
    };

    let name = env_file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| constants::ENV_FILE.to_string());

    contents.lines().map(str::trim).any(|line| {
        line == name
            || line.strip_prefix('/') == Some(name.as_str())
            || constants::GITIGNORE_PATTERNS.contains(&line)
    })
}

/// Write a new env file, asking before overwriting unless `force`.
pub fn execute(env_file: &Path, force: bool) -> Result<()> {
    info!(path = %env_file.display(), force, "generating env file");

    if env_file.exists() && !force {
        let overwrite = prompt::confirm(
            &format!("{} exists. Overwrite?", env_file.display()),
            false,
        )?;
        if !overwrite {
            output::warn("cancelled");
            output::hint("use --force to overwrite");
            return Ok(());
        }
    }

    let secret = zeroize::Zeroizing::new(generator::auth_secret());
    write_atomic(env_file, &template(Local::now(), &secret))?;

    output::success(&format!(
        "generated new env file at {}",
        output::path(env_file.display())
    ));

    if !gitignore_covers(env_file) {
        output::warn(&format!(
            "add {} to .gitignore if not already done",
            output::path(env_file.display())
        ));
    }

    Ok(())
}
