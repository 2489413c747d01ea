//! Tests for the `envseal-setup` driver that need no network.

use crate::support::*;

#[test]
fn test_setup_requires_token() {
    let t = Test::new();

    let output = t
        .setup_cmd()
        .args(["--repo", "acme/web", "--dry-run"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "GitHub token required");
    assert_stdout_contains(&output, "https://github.com/settings/tokens");
}

#[test]
fn test_setup_rejects_invalid_repo() {
    let t = Test::new();

    let output = t
        .setup_cmd()
        .args(["--token", "ghp_test", "--repo", "acme", "--dry-run"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid repository 'acme'");
}

#[test]
fn test_setup_dry_run_masks_and_lists() {
    let t = Test::new();

    let output = t
        .setup_cmd()
        .args([
            "--token",
            "ghp_test",
            "--repo",
            "acme/web",
            "--database-url",
            "postgres://prod/db",
            "--vercel-token",
            "",
            "--dry-run",
        ])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "acme/web");
    assert_stdout_contains(&output, "******************** (88 chars)");
    assert_stdout_contains(&output, "******************** (32 chars)");
    assert_stdout_contains(&output, "Dry run - secrets generated but not created");
    assert_stdout_contains(&output, "AUTH_SECRET  [generated]");
    assert_stdout_contains(&output, "DATABASE_URL  [provided]");
    assert_stdout_excludes(&output, "VERCEL_TOKEN  [provided]");
    assert_stdout_excludes(&output, "postgres://prod/db");
}

#[test]
fn test_setup_dry_run_reads_answers_from_stdin() {
    let t = Test::new();

    let output = t
        .setup_cmd()
        .args(["--token", "ghp_test", "--repo", "acme/web", "--dry-run"])
        .write_stdin("postgres://prod/db\nvercel_abc\n")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "DATABASE_URL  [provided]");
    assert_stdout_contains(&output, "VERCEL_TOKEN  [provided]");
}

#[test]
fn test_setup_token_from_env() {
    let t = Test::new();

    let output = t
        .setup_cmd()
        .args(["--repo", "acme/web", "--database-url", "", "--vercel-token", "", "--dry-run"])
        .env("GITHUB_TOKEN", "ghp_env")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "AUTH_SECRET  [generated]");
    assert_stdout_excludes(&output, "DATABASE_URL  [provided]");
}
