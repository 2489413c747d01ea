//! GitHub CLI backend.
//!
//! Runs `gh secret ...` as a subprocess. `gh` must be installed and already
//! authenticated; both are checked when the client is created.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::SecretsStore;
use crate::error::{RemoteError, Result};

/// Secrets store backed by the `gh` CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: PathBuf,
    repo: Option<String>,
}

impl GhCli {
    /// Locate `gh` and make sure it is authenticated.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::ToolNotFound` if `gh` is not on `PATH`, or
    /// `RemoteError::NotAuthenticated` if `gh auth status` fails.
    pub fn new(repo: Option<String>) -> Result<Self> {
        let program = which::which("gh").map_err(|_| RemoteError::ToolNotFound)?;
        debug!(program = %program.display(), "found gh");

        let authenticated = Command::new(&program)
            .args(["auth", "status"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);

        if !authenticated {
            return Err(RemoteError::NotAuthenticated.into());
        }

        Ok(Self { program, repo })
    }

    /// Run `gh secret <args> [-R repo]` and return stdout.
    fn run(&self, action: &str, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("secret").arg(action).args(args);
        if let Some(repo) = &self.repo {
            cmd.args(["-R", repo]);
        }

        trace!(action, "running gh secret");
        let output = cmd.stdin(Stdio::null()).output()?;

        if !output.status.success() {
            return Err(RemoteError::CommandFailed {
                action: action.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl SecretsStore for GhCli {
    fn name(&self) -> &'static str {
        "gh"
    }

    fn set_secret(&mut self, name: &str, value: &str) -> Result<()> {
        self.run("set", &[name, "-b", value])?;
        debug!(%name, "set secret via gh");
        Ok(())
    }

    fn list_secrets(&mut self) -> Result<Vec<String>> {
        // Piped output is tab-separated: NAME, then the update time.
        let stdout = self.run("list", &[])?;
        Ok(stdout
            .lines()
            .filter_map(|l| l.split_whitespace().next())
            .map(str::to_string)
            .collect())
    }

    fn delete_secret(&mut self, name: &str) -> Result<()> {
        self.run("delete", &[name, "-y"])?;
        debug!(%name, "deleted secret via gh");
        Ok(())
    }
}
