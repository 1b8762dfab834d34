use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::Rng;

use crate::errors::internal::CryptoError;
use crate::errors::InternalError;

/// Random bytes per remember token (256 bits of entropy)
pub const REMEMBER_TOKEN_BYTES: usize = 32;

/// Cryptographic operations provider
///
/// Password digests are Argon2id PHC strings salted per call and keyed with the
/// server-side pepper. Remember tokens are URL-safe base64 of OS-random bytes.
pub struct CryptoProvider {
    password_pepper: String,
}

impl CryptoProvider {
    /// Create a new CryptoProvider
    ///
    /// # Arguments
    /// * `password_pepper` - Secret mixed into every password digest (from Settings)
    pub fn new(password_pepper: String) -> Self {
        Self { password_pepper }
    }

    fn argon2(&self) -> Result<Argon2<'_>, InternalError> {
        Argon2::new_with_secret(
            self.password_pepper.as_bytes(),
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|e| InternalError::crypto("argon2_init", e.to_string()))
    }

    /// Hash a plaintext password
    ///
    /// A fresh salt is drawn on every call, so hashing the same password twice
    /// yields two different digests that both verify.
    ///
    /// # Returns
    /// * `Ok(String)` - The PHC-formatted Argon2id digest
    /// * `Err(InternalError)` - Hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, InternalError> {
        let salt = SaltString::generate(&mut rand_core::OsRng);
        let digest = self
            .argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| CryptoError::password_hash("crypto_provider", "hash_password", e))?
            .to_string();

        Ok(digest)
    }

    /// Verify a plaintext password against a stored digest
    ///
    /// The salt and parameters are read back from the digest itself. A digest that
    /// cannot be parsed never matches.
    ///
    /// # Returns
    /// * `Ok(true)` - Password matches
    /// * `Ok(false)` - Password does not match, or the digest is malformed
    /// * `Err(InternalError)` - Argon2 could not be initialised
    pub fn verify_password(&self, password_digest: &str, password: &str) -> Result<bool, InternalError> {
        let parsed = match PasswordHash::new(password_digest) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Stored password digest is malformed: {}", e);
                return Ok(false);
            }
        };

        Ok(self
            .argon2()?
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Generate a new remember token
    ///
    /// # Returns
    /// A URL-safe, unpadded base64 string of `REMEMBER_TOKEN_BYTES` random bytes
    pub fn generate_remember_token(&self) -> String {
        let mut rng = rand::rng();
        let random_bytes: [u8; REMEMBER_TOKEN_BYTES] = rng.random();
        URL_SAFE_NO_PAD.encode(random_bytes)
    }
}

/// Compare two byte strings without short-circuiting on the first difference
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

impl std::fmt::Debug for CryptoProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoProvider")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_crypto_provider() -> CryptoProvider {
        CryptoProvider::new("test-pepper-for-unit-tests".to_string())
    }

    #[test]
    fn test_hash_password_is_not_plaintext() {
        let crypto = create_test_crypto_provider();
        let digest = crypto.hash_password("foobar").unwrap();

        assert_ne!(digest, "foobar");
        assert!(digest.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_password_is_salted() {
        let crypto = create_test_crypto_provider();

        let digest1 = crypto.hash_password("foobar").unwrap();
        let digest2 = crypto.hash_password("foobar").unwrap();

        assert_ne!(digest1, digest2);
        assert!(crypto.verify_password(&digest1, "foobar").unwrap());
        assert!(crypto.verify_password(&digest2, "foobar").unwrap());
    }

    #[test]
    fn test_verify_password_rejects_wrong_password() {
        let crypto = create_test_crypto_provider();
        let digest = crypto.hash_password("foobar").unwrap();

        assert!(!crypto.verify_password(&digest, "invalid").unwrap());
    }

    #[test]
    fn test_verify_password_depends_on_pepper() {
        let crypto = create_test_crypto_provider();
        let other = CryptoProvider::new("a-different-pepper-value".to_string());
        let digest = crypto.hash_password("foobar").unwrap();

        assert!(!other.verify_password(&digest, "foobar").unwrap());
    }

    #[test]
    fn test_verify_password_malformed_digest_never_matches() {
        let crypto = create_test_crypto_provider();
        assert!(!crypto.verify_password("not-a-phc-string", "foobar").unwrap());
    }

    #[test]
    fn test_remember_token_format() {
        let crypto = create_test_crypto_provider();
        let token = crypto.generate_remember_token();

        // 32 bytes -> 43 unpadded base64 characters
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_remember_token_uniqueness() {
        let crypto = create_test_crypto_provider();

        let token1 = crypto.generate_remember_token();
        let token2 = crypto.generate_remember_token();

        assert_ne!(token1, token2);
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
    }
}
