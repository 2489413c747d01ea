//! GitHub commands: push, list and delete repository secrets.

use std::path::Path;

use clap::{Args, ValueEnum};
use tracing::{debug, info};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::env::EnvFile;
use crate::core::remote::{self, GhCli, GithubApi, SecretsStore};
use crate::core::{constants, repo};
use crate::error::{ConfigError, Error, Result};

/// How secrets reach GitHub.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    /// Through the authenticated `gh` CLI
    #[default]
    Gh,
    /// Directly through the REST API with client-side encryption
    Api,
}

/// Options shared by the GitHub commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RemoteArgs {
    /// Transport used to reach GitHub
    #[arg(long, value_enum, default_value_t = Transport::Gh)]
    pub via: Transport,

    /// GitHub token for --via api
    #[arg(long, env = constants::TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL for --via api
    #[arg(long, env = constants::API_URL_ENV)]
    pub api_url: Option<String>,
}

/// Open the secrets store selected by `args`.
pub fn open_store(
    args: &RemoteArgs,
    repo_arg: Option<&str>,
    config: &Config,
) -> Result<Box<dyn SecretsStore>> {
    match args.via {
        Transport::Gh => {
            // gh resolves the repository from the working copy on its own.
            let repo = match repo_arg.or(config.repo()) {
                Some(r) => Some(repo::validate_repo(r)?),
                None => None,
            };
            let gh = GhCli::new(repo)?;
            output::success("GitHub CLI authenticated");
            Ok(Box::new(gh))
        }
        Transport::Api => {
            let token = args
                .token
                .as_deref()
                .filter(|t| !t.is_empty())
                .ok_or(ConfigError::MissingToken)?;
            let repo = repo::resolve(repo_arg, config.repo())?;
            let api = GithubApi::new(token, &repo, &config.api_url(args.api_url.as_deref()))?;
            Ok(Box::new(api))
        }
    }
}

/// Push every non-public, non-empty key from `env_file`.
pub fn push(env_file: &Path, repo_arg: Option<&str>, args: &RemoteArgs, config: &Config) -> Result<()> {
    info!(path = %env_file.display(), via = ?args.via, "pushing secrets");

    let env = EnvFile::load(env_file)?;
    let (entries, skipped) = remote::push_candidates(&env, &config.exclude_prefixes());

    let mut store = open_store(args, repo_arg, config)?;
    debug!(store = store.name(), count = entries.len(), "opened secrets store");

    if entries.is_empty() {
        output::warn("nothing to push");
        return Ok(());
    }

    let summary = remote::push_all(store.as_mut(), &entries, |name, result| {
        output::push_outcome("set secret:", "set", name, result)
    });

    output::blank();
    if !skipped.is_empty() {
        output::dimmed(&format!(
            "skipped {} (empty or public): {}",
            skipped.len(),
            skipped.join(", ")
        ));
    }

    if summary.is_complete() {
        output::success(&format!("pushed {} secrets to GitHub", summary.pushed));
        Ok(())
    } else {
        output::warn(&format!(
            "pushed {}/{} secrets to GitHub",
            summary.pushed,
            summary.attempted()
        ));
        Err(Error::PushFailed {
            failed: summary.failed.len(),
            total: summary.attempted(),
        })
    }
}

/// List remote secret names.
pub fn list(repo_arg: Option<&str>, args: &RemoteArgs, config: &Config) -> Result<()> {
    let mut store = open_store(args, repo_arg, config)?;
    let names = store.list_secrets()?;

    output::section("GitHub Repository Secrets");
    if names.is_empty() {
        output::dimmed("no secrets");
    }
    for name in &names {
        output::list_item(name);
    }
    output::rule();

    Ok(())
}

/// Delete one remote secret.
pub fn delete(name: &str, repo_arg: Option<&str>, args: &RemoteArgs, config: &Config) -> Result<()> {
    info!(%name, "deleting secret");

    let mut store = open_store(args, repo_arg, config)?;
    store.delete_secret(name)?;
    output::success(&format!("deleted secret: {}", output::key(name)));

    Ok(())
}
