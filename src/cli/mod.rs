//! Command-line interface.

pub mod generate;
pub mod github;
pub mod output;
pub mod prompt;
pub mod rotate;
pub mod secret;
pub mod setup;
pub mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::config::Config;
use crate::core::constants;
use crate::error::Result;
use github::RemoteArgs;
use secret::SecretKind;

/// envseal - generate, validate and publish application secrets.
#[derive(Parser)]
#[command(
    name = "envseal",
    about = "Generate, validate and publish application secrets",
    version,
    after_help = "Secrets are pushed to GitHub Actions via the gh CLI or the REST API."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the .env file
    #[arg(long, global = true, default_value = constants::ENV_FILE, value_name = "PATH")]
    pub env_file: PathBuf,

    /// GitHub repository (owner/name)
    #[arg(long, global = true, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check the .env file for missing, empty and weak secrets
    Validate,

    /// Write a new .env file with a freshly generated AUTH_SECRET
    Generate {
        /// Overwrite without confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Replace a secret in the .env file, keeping a timestamped backup
    Rotate {
        /// Key to rotate
        #[arg(long, default_value = constants::AUTH_SECRET_KEY)]
        key: String,
    },

    /// Push every non-public secret in the .env file to GitHub
    GithubPush {
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// List the repository's secret names
    GithubList {
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Delete a repository secret
    GithubDelete {
        /// Secret name
        name: String,
        #[command(flatten)]
        remote: RemoteArgs,
    },

    /// Print a freshly generated secret
    Secret {
        /// Kind of secret
        #[arg(long, value_enum, default_value_t = SecretKind::Auth)]
        kind: SecretKind,
        /// Length override (bytes for auth, characters for db-password)
        #[arg(long)]
        length: Option<usize>,
    },
}

/// Install the tracing subscriber.
///
/// `ENVSEAL_LOG` takes precedence; otherwise `--verbose` selects debug.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("envseal=debug")
        } else {
            EnvFilter::new("envseal=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let env_file = cli.env_file.as_path();
    let repo = cli.repo.as_deref();

    // Only the actions that read .envseal.toml load it.
    match cli.command {
        Validate => validate::execute(env_file, Config::load()?.rules()),
        Generate { force } => generate::execute(env_file, force),
        Rotate { key } => rotate::execute(env_file, &key),
        GithubPush { remote } => github::push(env_file, repo, &remote, &Config::load()?),
        GithubList { remote } => github::list(repo, &remote, &Config::load()?),
        GithubDelete { name, remote } => github::delete(&name, repo, &remote, &Config::load()?),
        Secret { kind, length } => secret::execute(kind, length),
    }
}
