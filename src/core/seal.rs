//! Sealed-box encryption for GitHub Actions secrets.
//!
//! GitHub expects secret values encrypted with the repository's public key
//! using libsodium sealed boxes (X25519 + XSalsa20-Poly1305). The sender uses
//! an ephemeral keypair, so only the repository can decrypt.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::PublicKey;

use crate::core::types::RemotePublicKey;
use crate::error::{CryptoError, Result};

/// Length of a Curve25519 public key.
pub const KEY_LENGTH: usize = 32;

/// Decode a base64 public key into a `crypto_box` key.
fn decode_key(key_b64: &str) -> std::result::Result<PublicKey, CryptoError> {
    let bytes = BASE64
        .decode(key_b64.trim())
        .map_err(|_| CryptoError::InvalidBase64)?;

    let array: [u8; KEY_LENGTH] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength(bytes.len()))?;

    Ok(PublicKey::from(array))
}

/// Encrypt `plaintext` for the holder of `public_key`.
///
/// Returns the base64 ciphertext expected by the secrets API.
///
/// # Errors
///
/// Returns `CryptoError` if the key is not valid base64, is not 32 bytes, or
/// sealing fails. Plaintext is never returned in place of ciphertext.
pub fn seal(public_key: &RemotePublicKey, plaintext: &str) -> Result<String> {
    let key = decode_key(&public_key.key)?;
    let ciphertext = key
        .seal(&mut OsRng, plaintext.as_bytes())
        .map_err(|_| CryptoError::SealFailed)?;
    Ok(BASE64.encode(ciphertext))
}
