//! Tests for error reporting and exit codes.

use crate::support::*;

#[test]
fn test_unknown_action_fails() {
    let t = Test::new();

    let output = t.run(&["frobnicate"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "frobnicate");
}

#[test]
fn test_missing_action_shows_usage() {
    let t = Test::new();

    let output = t.run(&[]);

    assert_failure(&output);
    assert_stderr_contains(&output, "Usage");
}

#[test]
fn test_malformed_config_fails() {
    let t = Test::with_env(VALID_ENV);
    t.write(".envseal.toml", "[validation\n");

    let output = t.validate();

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
}

#[test]
fn test_malformed_config_does_not_affect_local_actions() {
    let t = Test::new();
    t.write(".envseal.toml", "[validation\n");

    assert_success(&t.run(&["secret"]));
    assert_success(&t.generate_force());
    assert_success(&t.rotate());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let t = Test::with_env(VALID_ENV);

    let output = t.run(&["validate", "--verbose"]);

    assert_success(&output);
    assert_stderr_contains(&output, "validating env file");
}

#[test]
fn test_api_push_requires_token() {
    let t = Test::with_env(VALID_ENV);

    let output = t.run(&["github-push", "--via", "api", "--repo", "acme/web"]);

    assert_failure(&output);
    assert_stderr_contains(&output, "GitHub token required");
    assert_stdout_contains(&output, "GITHUB_TOKEN");
}

#[test]
fn test_invalid_repo_rejected() {
    let t = Test::with_env(VALID_ENV);

    let output = t
        .cmd()
        .args(["github-push", "--via", "api", "--repo", "not-a-repo"])
        .env("GITHUB_TOKEN", "ghp_test")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid repository 'not-a-repo'");
}
