//! Cryptographic primitives for the credential codec.
//!
//! Provides salt/IV generation, key derivation, and AES-256-CBC
//! encryption of password material.

pub mod cipher;
pub mod kdf;

pub use cipher::{decrypt, encrypt, generate_iv, generate_salt};
pub use kdf::derive_key;

/// Length of the per-user salt (16 bytes).
pub const SALT_LEN: usize = 16;
/// Length of the CBC initialization vector (16 bytes, one AES block).
pub const IV_LEN: usize = 16;
/// Length of the derived encryption key (32 bytes / 256 bits).
pub const KEY_LEN: usize = 32;
