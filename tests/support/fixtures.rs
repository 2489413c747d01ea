//! Shared fixtures.

/// A strong (44 char) auth secret.
pub const STRONG_SECRET: &str = "c2VjcmV0LXNlY3JldC1zZWNyZXQtc2VjcmV0LXNlYw==";

/// A complete, valid env file.
pub const VALID_ENV: &str = "# app\nDATABASE_URL=\"postgres://localhost/app\"\nAUTH_SECRET=\"c2VjcmV0LXNlY3JldC1zZWNyZXQtc2VjcmV0LXNlYw==\"\nNEXT_PUBLIC_APP_URL=\"http://localhost:3000\"\n";

/// Fake `gh` that logs its arguments and fails `secret set FAIL_ME`.
pub const FAKE_GH: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "__LOG__"
case "$1 $2" in
  "auth status") exit "${FAKE_GH_AUTH_EXIT:-0}" ;;
  "secret list") printf 'AUTH_SECRET\tUpdated 2024-01-01\nDATABASE_URL\tUpdated 2024-01-01\n' ;;
  "secret set")
    if [ "$3" = "FAIL_ME" ]; then
      echo "HTTP 422: rejected" >&2
      exit 1
    fi
    ;;
esac
exit 0
"#;
