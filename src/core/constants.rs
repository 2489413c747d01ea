//! Constants used throughout envseal.
//!
//! Centralizes magic strings and default values.

/// Project configuration file name.
pub const CONFIG_FILE: &str = ".envseal.toml";

/// Default environment file.
pub const ENV_FILE: &str = ".env";

/// Keys that must be present and non-empty.
pub const REQUIRED_KEYS: &[&str] = &["DATABASE_URL", "AUTH_SECRET"];

/// Keys reported when unset, without affecting validity.
pub const OPTIONAL_KEYS: &[&str] = &[
    "AUTH_GOOGLE_ID",
    "AUTH_GOOGLE_SECRET",
    "AUTH_GITHUB_ID",
    "AUTH_GITHUB_SECRET",
    "RESEND_API_KEY",
];

/// The authentication secret managed by `generate` and `rotate`.
pub const AUTH_SECRET_KEY: &str = "AUTH_SECRET";

/// Minimum length in characters before `AUTH_SECRET` counts as weak.
pub const AUTH_SECRET_MIN_LENGTH: usize = 32;

/// Random bytes in a generated auth secret.
pub const AUTH_SECRET_BYTES: usize = 64;

/// Characters in a generated database password.
pub const DB_PASSWORD_LENGTH: usize = 32;

/// Random bytes in a generated JWT signing secret.
pub const JWT_SECRET_BYTES: usize = 64;

/// Keys with these prefixes are client-visible and never pushed.
pub const PUBLIC_PREFIXES: &[&str] = &["NEXT_PUBLIC"];

/// GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Log filter environment variable.
pub const LOG_ENV: &str = "ENVSEAL_LOG";

/// Gitignore patterns that cover the default env file.
pub const GITIGNORE_PATTERNS: &[&str] = &[".env", "/.env", ".env*", "*.env"];
