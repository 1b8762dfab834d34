use std::sync::Arc;

use crate::errors::InternalError;
use crate::providers::user_validator_provider::normalize_email;
use crate::providers::CryptoProvider;
use crate::stores::UserLookup;
use crate::types::internal::pipeline::PasswordInput;
use crate::types::internal::{AuthFailure, AuthResult, PreparedUser, ValidatedUser};

/// Credential manager: turns validated users into storable ones and checks
/// sign-in attempts against stored digests
pub struct CredentialProvider {
    crypto_provider: Arc<CryptoProvider>,
}

impl CredentialProvider {
    pub fn new(crypto_provider: Arc<CryptoProvider>) -> Self {
        Self { crypto_provider }
    }

    /// Derive the storable form of a validated user
    ///
    /// Hashes the submitted password (or keeps the stored digest when none was
    /// submitted), issues a fresh remember token and drops all plaintext.
    ///
    /// # Returns
    /// * `Ok(PreparedUser)` - Ready to insert or update
    /// * `Err(InternalError)` - Password hashing failed
    pub fn prepare_for_persistence(&self, validated: ValidatedUser) -> Result<PreparedUser, InternalError> {
        let (password_digest, rehashed) = match validated.password {
            PasswordInput::Plaintext(plaintext) => (self.crypto_provider.hash_password(&plaintext)?, true),
            PasswordInput::Stored(digest) => (digest, false),
        };

        Ok(PreparedUser {
            id: validated.id,
            name: validated.name,
            email: validated.email,
            password_digest,
            rehashed,
            remember_token: self.crypto_provider.generate_remember_token(),
            is_admin: validated.is_admin,
        })
    }

    /// Check an email/password pair
    ///
    /// # Arguments
    /// * `email` - As typed by the user; normalized before lookup
    /// * `password` - Plaintext password
    /// * `lookup` - Where to find the stored record
    ///
    /// # Returns
    /// * `Ok(Ok(UserRecord))` - Credentials match
    /// * `Ok(Err(AuthFailure))` - Unknown email or wrong password, indistinguishably
    /// * `Err(InternalError)` - The lookup or Argon2 itself failed
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
        lookup: &impl UserLookup,
    ) -> Result<AuthResult, InternalError> {
        let email = normalize_email(email);

        let Some(user) = lookup.find_by_email(&email).await? else {
            // Spend the same hashing cost as a real comparison
            self.crypto_provider.hash_password(password)?;
            return Ok(Err(AuthFailure));
        };

        if self.crypto_provider.verify_password(&user.password_digest, password)? {
            Ok(Ok(user))
        } else {
            Ok(Err(AuthFailure))
        }
    }
}
