mod crypto;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

use crate::crypto::IV_LEN;

/// A storable credential pair.
///
/// `cipher_text` holds the password encrypted under a key derived from the
/// password and `salt`, formatted as `<iv_hex>:<ciphertext_hex>`. The salt is
/// a per-user diversifier, not a secret; both fields are persisted as plain
/// text columns on the user record and must be replaced together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub cipher_text: String,
    pub salt: String,
}

/// Generates a fresh per-user salt: 16 random bytes as a 32-char hex string.
///
/// # Errors
///
/// Fails only when the OS random generator is unavailable. No salt can be
/// issued without secure randomness, so this is not recoverable.
pub fn generate_salt() -> Result<String> {
    Ok(hex::encode(crypto::generate_salt()?))
}

/// Encrypts `password` under a key derived from `password + salt`.
///
/// A fresh random IV is drawn on every call, so two invocations with
/// identical inputs produce different cipher texts. The result is
/// `hex(iv) + ":" + hex(ciphertext)`.
///
/// # Errors
///
/// Fails only when the OS random generator is unavailable.
pub fn encrypt_password(password: &str, salt: &str) -> Result<String> {
    let iv = crypto::generate_iv()?;
    let mut key = crypto::derive_key(password, salt);
    let ciphertext = crypto::encrypt(&key, &iv, password.as_bytes());
    key.zeroize();

    Ok(format!("{}:{}", hex::encode(iv), hex::encode(ciphertext)))
}

/// Checks `input_password` against a stored credential pair.
///
/// Returns `true` iff decrypting `stored_cipher_text` with the key derived
/// from `input_password + salt` yields `input_password` byte for byte. The
/// final comparison is constant-time. Every failure mode, from a missing
/// `:` separator to a padding error under the wrong key, folds into `false`;
/// this function never panics and never surfaces an error, so the caller
/// cannot distinguish malformed storage from a wrong password.
pub fn verify_password(input_password: &str, stored_cipher_text: &str, salt: &str) -> bool {
    decrypt_candidate(input_password, stored_cipher_text, salt)
        .map(|plaintext| bool::from(plaintext.as_slice().ct_eq(input_password.as_bytes())))
        .unwrap_or(false)
}

/// Decrypts the stored credential under the candidate password.
///
/// `None` covers every malformed or mismatching input: missing separator,
/// empty segments, non-hex data, an IV that is not one block wide, or a
/// decryption that fails to unpad.
fn decrypt_candidate(
    input_password: &str,
    stored: &str,
    salt: &str,
) -> Option<Zeroizing<Vec<u8>>> {
    let (iv_hex, encrypted_hex) = stored.split_once(':')?;
    if iv_hex.is_empty() || encrypted_hex.is_empty() {
        return None;
    }

    let iv: [u8; IV_LEN] = hex::decode(iv_hex).ok()?.try_into().ok()?;
    let ciphertext = hex::decode(encrypted_hex).ok()?;

    let mut key = crypto::derive_key(input_password, salt);
    let plaintext = crypto::decrypt(&key, &iv, &ciphertext).ok();
    key.zeroize();

    plaintext.map(Zeroizing::new)
}

/// Rotates a credential: fresh salt, fresh cipher text.
///
/// This is the only sanctioned way to set or reset a password. The returned
/// pair fully replaces the user's stored fields; old salt and cipher text
/// are never reused.
///
/// # Errors
///
/// Fails only when the OS random generator is unavailable.
pub fn reencrypt_password(password: &str) -> Result<Credential> {
    let salt = generate_salt()?;
    let cipher_text = encrypt_password(password, &salt)?;

    Ok(Credential { cipher_text, salt })
}
