//! Secret command - print one freshly generated secret.

use clap::ValueEnum;

use crate::core::{constants, generator};
use crate::error::Result;

/// Kind of secret to generate.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretKind {
    /// Base64 of random bytes (default 64)
    Auth,
    /// URL-safe password (default 32 chars)
    DbPassword,
    /// URL-safe signing secret (64 bytes)
    Jwt,
}

/// Generate a secret of `kind`, with an optional length override.
pub fn generate(kind: SecretKind, length: Option<usize>) -> String {
    match kind {
        SecretKind::Auth => {
            generator::generate_auth_secret(length.unwrap_or(constants::AUTH_SECRET_BYTES))
        }
        SecretKind::DbPassword => {
            generator::generate_db_password(length.unwrap_or(constants::DB_PASSWORD_LENGTH))
        }
        SecretKind::Jwt => generator::generate_jwt_secret(),
    }
}

/// Print the secret to stdout, alone on its line.
pub fn execute(kind: SecretKind, length: Option<usize>) -> Result<()> {
    let secret = zeroize::Zeroizing::new(generate(kind, length));
    println!("{}", secret.as_str());
    Ok(())
}
