//! Tests for `envseal validate` command.

use crate::support::*;

#[test]
fn test_validate_passes_on_complete_file() {
    let t = Test::with_env(VALID_ENV);

    let output = t.validate();

    assert_success(&output);
    assert_stdout_contains(&output, "Environment Validation");
    assert_stdout_contains(&output, ".env file exists");
    assert_stdout_contains(&output, "All validations passed!");
}

#[test]
fn test_validate_missing_file_fails() {
    let t = Test::new();

    let output = t.validate();

    assert_failure(&output);
    assert_eq!(stderr(&output).matches("not found").count(), 1);
    assert_stderr_contains(&output, ".env not found");
    assert_stdout_contains(&output, "envseal generate");
    assert_stdout_excludes(&output, "All validations passed!");
}

#[test]
fn test_validate_missing_required_key() {
    let t = Test::with_env(&format!("AUTH_SECRET=\"{}\"\n", STRONG_SECRET));

    let output = t.validate();

    assert_failure(&output);
    assert_stderr_contains(&output, "Missing required secrets:");
    assert_stdout_contains(&output, "DATABASE_URL");
    assert_stderr_contains(&output, "1 required secret missing or empty");
}

#[test]
fn test_validate_empty_value_fails() {
    let t = Test::with_env(&format!(
        "DATABASE_URL=\"\"\nAUTH_SECRET=\"{}\"\n",
        STRONG_SECRET
    ));

    let output = t.validate();

    assert_failure(&output);
    assert_stdout_contains(&output, "Empty required secrets:");
    assert_stdout_contains(&output, "DATABASE_URL");
}

#[test]
fn test_validate_weak_secret_warns_but_passes() {
    let t = Test::with_env("DATABASE_URL=\"postgres://db\"\nAUTH_SECRET=\"short\"\n");

    let output = t.validate();

    assert_success(&output);
    assert_stdout_contains(&output, "Weak secrets detected:");
    assert_stdout_contains(&output, "AUTH_SECRET (too short: 5 chars)");
    assert_stdout_contains(&output, "All validations passed!");
}

#[test]
fn test_validate_lists_unset_optional_keys() {
    let t = Test::with_env(VALID_ENV);

    let output = t.validate();

    assert_success(&output);
    assert_stdout_contains(&output, "Optional secrets not set:");
    assert_stdout_contains(&output, "AUTH_GOOGLE_ID");
}

#[test]
fn test_validate_custom_env_file() {
    let t = Test::new();
    t.write("production.env", VALID_ENV);

    let output = t.run(&["validate", "--env-file", "production.env"]);

    assert_success(&output);
    assert_stdout_contains(&output, "production.env file exists");
}

#[test]
fn test_validate_uses_config_rules() {
    let t = Test::with_env(VALID_ENV);
    t.write(
        ".envseal.toml",
        "[validation]\nrequired = [\"DATABASE_URL\", \"AUTH_SECRET\", \"STRIPE_KEY\"]\n",
    );

    let output = t.validate();

    assert_failure(&output);
    assert_stdout_contains(&output, "STRIPE_KEY");
}
