//! Secret generation.
//!
//! Every value is drawn from the operating system CSPRNG.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::core::constants::{AUTH_SECRET_BYTES, DB_PASSWORD_LENGTH, JWT_SECRET_BYTES};

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Base64 encoding of `length` random bytes.
pub fn generate_auth_secret(length: usize) -> String {
    STANDARD.encode(random_bytes(length))
}

/// URL-safe random password of exactly `length` characters.
pub fn generate_db_password(length: usize) -> String {
    let mut token = URL_SAFE_NO_PAD.encode(random_bytes(length));
    token.truncate(length);
    token
}

/// URL-safe signing secret with 64 bytes of entropy.
pub fn generate_jwt_secret() -> String {
    URL_SAFE_NO_PAD.encode(random_bytes(JWT_SECRET_BYTES))
}

/// Auth secret with the default length.
pub fn auth_secret() -> String {
    generate_auth_secret(AUTH_SECRET_BYTES)
}

/// Database password with the default length.
pub fn db_password() -> String {
    generate_db_password(DB_PASSWORD_LENGTH)
}
