//! Tests for the `github-*` commands over the gh CLI.

#![cfg(unix)]

use crate::support::*;
use tempfile::TempDir;

#[test]
fn test_push_sets_private_non_empty_secrets() {
    let t = Test::with_env(&format!(
        "DATABASE_URL=\"postgres://db\"\nAUTH_SECRET=\"{}\"\nEMPTY=\"\"\nNEXT_PUBLIC_APP_URL=\"http://localhost:3000\"\n",
        STRONG_SECRET
    ))
    .fake_gh();

    let output = t.github_push();

    assert_success(&output);
    assert_stdout_contains(&output, "GitHub CLI authenticated");
    assert_stdout_contains(&output, "set secret: DATABASE_URL");
    assert_stdout_contains(&output, "set secret: AUTH_SECRET");
    assert_stdout_contains(&output, "pushed 2 secrets to GitHub");
    assert_stdout_excludes(&output, "set secret: NEXT_PUBLIC_APP_URL");
    assert_stdout_excludes(&output, "set secret: EMPTY");

    let calls = t.gh_calls();
    assert_eq!(calls[0], "auth status");
    assert_eq!(calls[1], "secret set DATABASE_URL -b postgres://db");
    assert_eq!(calls[2], format!("secret set AUTH_SECRET -b {}", STRONG_SECRET));
    assert_eq!(calls.len(), 3);
}

#[test]
fn test_push_passes_repo() {
    let t = Test::with_env("DATABASE_URL=postgres://db\n").fake_gh();

    let output = t.run(&["github-push", "--repo", "acme/web"]);

    assert_success(&output);
    assert!(t
        .gh_calls()
        .contains(&"secret set DATABASE_URL -b postgres://db -R acme/web".to_string()));
}

#[test]
fn test_push_repo_from_config() {
    let t = Test::with_env("DATABASE_URL=postgres://db\n").fake_gh();
    t.write(".envseal.toml", "[github]\nrepo = \"acme/api\"\n");

    assert_success(&t.github_push());
    assert!(t.gh_calls().iter().any(|c| c.ends_with("-R acme/api")));
}

#[test]
fn test_push_respects_configured_prefixes() {
    let t = Test::with_env("DATABASE_URL=postgres://db\nVITE_KEY=abc\n").fake_gh();
    t.write(".envseal.toml", "[push]\nexclude_prefixes = [\"VITE_\"]\n");

    let output = t.github_push();

    assert_success(&output);
    assert_stdout_contains(&output, "pushed 1 secrets to GitHub");
    assert_stdout_contains(&output, "VITE_KEY");
}

#[test]
fn test_push_sends_backslashes_unchanged() {
    let t = Test::with_env("DB_PASSWORD=\"C:\\new\\root\"\n").fake_gh();

    assert_success(&t.github_push());
    assert!(t
        .gh_calls()
        .contains(&"secret set DB_PASSWORD -b C:\\new\\root".to_string()));
}

#[test]
fn test_push_continues_after_failure() {
    let t = Test::with_env("DATABASE_URL=postgres://db\nFAIL_ME=x\nAUTH_SECRET=abc\n").fake_gh();

    let output = t.github_push();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to set FAIL_ME");
    assert_stderr_contains(&output, "HTTP 422: rejected");
    assert_stderr_contains(&output, "1 of 3 secrets failed to push");
    assert_stdout_contains(&output, "set secret: AUTH_SECRET");
}

#[test]
fn test_push_requires_gh_login() {
    let t = Test::with_env(VALID_ENV).fake_gh();

    let output = t
        .cmd()
        .arg("github-push")
        .env("FAKE_GH_AUTH_EXIT", "1")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "GitHub CLI not authenticated");
    assert_stdout_contains(&output, "gh auth login");
    assert_eq!(t.gh_calls(), vec!["auth status".to_string()]);
}

#[test]
fn test_push_without_gh_installed() {
    let t = Test::with_env(VALID_ENV);
    let empty = TempDir::new().unwrap();

    let output = t
        .cmd()
        .arg("github-push")
        .env("PATH", empty.path())
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "GitHub CLI (gh) not installed");
    assert_stdout_contains(&output, "https://cli.github.com");
}

#[test]
fn test_push_missing_env_file() {
    let t = Test::new().fake_gh();

    let output = t.github_push();

    assert_failure(&output);
    assert_stderr_contains(&output, ".env not found");
    assert!(t.gh_calls().is_empty());
}

#[test]
fn test_list_prints_names() {
    let t = Test::new().fake_gh();

    let output = t.run(&["github-list"]);

    assert_success(&output);
    assert_stdout_contains(&output, "GitHub Repository Secrets");
    assert_stdout_contains(&output, "• AUTH_SECRET\n");
    assert_stdout_contains(&output, "• DATABASE_URL\n");
    assert_stdout_excludes(&output, "Updated");
}

#[test]
fn test_delete_confirms_non_interactively() {
    let t = Test::new().fake_gh();

    let output = t.run(&["github-delete", "OLD_TOKEN", "--repo", "acme/web"]);

    assert_success(&output);
    assert_stdout_contains(&output, "deleted secret: OLD_TOKEN");
    assert!(t
        .gh_calls()
        .contains(&"secret delete OLD_TOKEN -y -R acme/web".to_string()));
}
