use super::KEY_LEN;
use sha2::{Digest, Sha256};

/// Derive the AES-256 key as SHA-256 over the UTF-8 bytes of `password + salt`.
///
/// Deterministic: verification re-derives the identical key from the
/// candidate password and the stored salt.
pub fn derive_key(password: &str, salt: &str) -> [u8; KEY_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kdf_is_deterministic() {
        let k1 = derive_key("password", "a1b2c3d4e5f60718a1b2c3d4e5f60718");
        let k2 = derive_key("password", "a1b2c3d4e5f60718a1b2c3d4e5f60718");

        assert_eq!(k1, k2);
    }

    #[test]
    fn password_affects_output() {
        let salt = "a1b2c3d4e5f60718a1b2c3d4e5f60718";

        assert_ne!(derive_key("pw1", salt), derive_key("pw2", salt));
    }

    #[test]
    fn salt_affects_output() {
        let k1 = derive_key("pw", "a1b2c3d4e5f60718a1b2c3d4e5f60718");
        let k2 = derive_key("pw", "00000000000000000000000000000000");

        assert_ne!(k1, k2);
    }

    #[test]
    fn concatenation_matches_single_update() {
        // The key must equal SHA-256 of the plain concatenation, since the
        // stored salt is appended to the password before hashing.
        let joined = format!("{}{}", "pw", "abcd");
        let expected: [u8; KEY_LEN] = Sha256::digest(joined.as_bytes()).into();

        assert_eq!(derive_key("pw", "abcd"), expected);
    }
}
