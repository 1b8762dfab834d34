use std::sync::Arc;

use crate::app_data::AppData;
use crate::errors::internal::UserError;
use crate::errors::InternalError;
use crate::providers::crypto_provider::constant_time_eq;
use crate::providers::user_validator_provider::normalize_email;
use crate::providers::{CredentialProvider, UserValidatorProvider};
use crate::stores::{UserLookup, UserStore};
use crate::types::internal::{
    AuthResult, PreparedUser, UserCandidate, UserRecord, ValidationResult, ViolationKind,
};

/// Handles the user lifecycle: create, update, admin flag, delete, and the
/// sign-in and remember-token checks
pub struct UserCoordinator {
    user_store: Arc<UserStore>,
    credential_provider: Arc<CredentialProvider>,
    user_validator: Arc<UserValidatorProvider>,
}

impl UserCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: Arc::clone(&app_data.user_store),
            credential_provider: Arc::clone(&app_data.credential_provider),
            user_validator: Arc::clone(&app_data.user_validator),
        }
    }

    /// Validate a candidate without saving it
    pub async fn validate(&self, candidate: &UserCandidate) -> Result<ValidationResult, InternalError> {
        let existing = self
            .user_store
            .find_all_by_email(&normalize_email(&candidate.email))
            .await?;

        Ok(self.user_validator.validate(candidate, &existing))
    }

    /// Run the full save pipeline: validate, prepare, persist
    ///
    /// New candidates are inserted, candidates from `UserRecord::edit` update their
    /// record. Every successful save issues a new remember token.
    ///
    /// # Returns
    /// * `Ok(UserRecord)` - The saved record
    /// * `Err(InternalError::User(UserError::Invalid(_)))` - Validation failed; nothing
    ///   was written
    /// * `Err(InternalError)` - Hashing or persistence failed
    pub async fn save(&self, candidate: UserCandidate) -> Result<UserRecord, InternalError> {
        let existing = self
            .user_store
            .find_all_by_email(&normalize_email(&candidate.email))
            .await?;

        let validated = self
            .user_validator
            .check(candidate, &existing)
            .map_err(|result| {
                tracing::debug!("User rejected by validation: {}", result);
                UserError::Invalid(result)
            })?;

        let prepared = self.credential_provider.prepare_for_persistence(validated)?;

        let record = self.persist(prepared).await?;
        tracing::info!(user_id = %record.id, "User saved");

        Ok(record)
    }

    async fn persist(&self, prepared: PreparedUser) -> Result<UserRecord, InternalError> {
        let result = match prepared.id.clone() {
            Some(id) => self.user_store.update(&id, prepared).await,
            None => self.user_store.insert(prepared).await,
        };

        // A concurrent writer can claim the email between validation and write
        result.map_err(|e| match e {
            InternalError::User(UserError::EmailTaken { email }) => {
                tracing::debug!("Uniqueness index rejected {}", email);
                InternalError::User(UserError::Invalid(ValidationResult::from(ViolationKind::EmailTaken)))
            }
            other => other,
        })
    }

    /// Set the admin flag through the full save pipeline
    ///
    /// Validation runs again and a new remember token is issued, as for any update.
    pub async fn set_admin_flag(&self, record: &UserRecord, value: bool) -> Result<UserRecord, InternalError> {
        let mut candidate = record.edit();
        candidate.is_admin = value;
        self.save(candidate).await
    }

    pub async fn toggle_admin(&self, record: &UserRecord) -> Result<UserRecord, InternalError> {
        self.set_admin_flag(record, !record.is_admin).await
    }

    /// Check a sign-in attempt
    ///
    /// Returns `Ok(Err(AuthFailure))` for both an unknown email and a wrong password.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthResult, InternalError> {
        let result = self
            .credential_provider
            .authenticate(email, password, self.user_store.as_ref())
            .await?;

        match &result {
            Ok(user) => tracing::info!(user_id = %user.id, "User authenticated"),
            Err(failure) => tracing::warn!("Sign-in rejected: {}", failure),
        }

        Ok(result)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError> {
        self.user_store.find_by_email(&normalize_email(email)).await
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<UserRecord>, InternalError> {
        self.user_store.find_by_id(user_id).await
    }

    /// Resolve a persistent-session cookie
    ///
    /// # Returns
    /// * `Ok(Some(UserRecord))` - The user exists and the token is its current one
    /// * `Ok(None)` - Unknown user or stale token
    pub async fn verify_remember_token(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Option<UserRecord>, InternalError> {
        let Some(user) = self.user_store.find_by_id(user_id).await? else {
            return Ok(None);
        };

        if constant_time_eq(user.remember_token.as_bytes(), token.as_bytes()) {
            Ok(Some(user))
        } else {
            tracing::debug!(user_id = %user_id, "Remember token did not match");
            Ok(None)
        }
    }

    /// Look a user up by remember token alone
    pub async fn find_by_remember_token(&self, token: &str) -> Result<Option<UserRecord>, InternalError> {
        if token.trim().is_empty() {
            return Ok(None);
        }
        self.user_store.find_by_remember_token(token).await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<(), InternalError> {
        self.user_store.delete(user_id).await?;
        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
