//! Tests for `envseal secret` command.

use crate::support::*;

#[test]
fn test_secret_defaults_to_auth() {
    let t = Test::new();

    let output = t.run(&["secret"]);

    assert_success(&output);
    assert_eq!(stdout(&output).trim().len(), 88);
}

#[test]
fn test_secret_db_password_length() {
    let t = Test::new();

    let output = t.run(&["secret", "--kind", "db-password", "--length", "20"]);

    assert_success(&output);
    let password = stdout(&output).trim().to_string();
    assert_eq!(password.len(), 20);
    assert!(password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
}

#[test]
fn test_secret_jwt() {
    let t = Test::new();

    let output = t.run(&["secret", "--kind", "jwt"]);

    assert_success(&output);
    assert_eq!(stdout(&output).trim().len(), 86);
}

#[test]
fn test_secret_rejects_unknown_kind() {
    let t = Test::new();

    let output = t.run(&["secret", "--kind", "pin"]);

    assert_failure(&output);
}
