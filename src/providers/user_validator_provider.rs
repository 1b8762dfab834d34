use std::sync::LazyLock;

use regex::Regex;

use crate::types::internal::pipeline::PasswordInput;
use crate::types::internal::{UserCandidate, UserRecord, ValidatedUser, ValidationResult, ViolationKind};

pub const NAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 100;

// ASCII mode: `\w`, `\d` and case folding match ASCII only
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[\w+\-.]+@[a-z\d\-.]+\.[a-z]{2,}$").expect("email pattern is valid")
});

/// Trim and lowercase an email for storage and comparison
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates user candidates before they are persisted
///
/// Rules:
/// - name: present, at most 50 characters
/// - email: present, well formed, unique (case-insensitive) among other records
/// - password (new records, or when either password field is submitted):
///   present, 6-100 characters, equal to its confirmation
///
/// Every rule is evaluated so all violations are reported together.
#[derive(Debug, Default)]
pub struct UserValidatorProvider;

impl UserValidatorProvider {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate every rule against the candidate
    ///
    /// # Arguments
    /// * `candidate` - The record being created or updated
    /// * `existing` - Persisted records to check email uniqueness against; the
    ///   candidate's own record is ignored
    pub fn validate(&self, candidate: &UserCandidate, existing: &[UserRecord]) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.check(is_blank(&candidate.name), ViolationKind::NameBlank);
        result.check(candidate.name.chars().count() > NAME_MAX_LENGTH, ViolationKind::NameTooLong);

        let email = normalize_email(&candidate.email);
        result.check(email.is_empty(), ViolationKind::EmailBlank);
        result.check(!EMAIL_PATTERN.is_match(&email), ViolationKind::EmailInvalid);

        let own_id = candidate.id();
        let taken = existing
            .iter()
            .filter(|record| Some(record.id.as_str()) != own_id)
            .any(|record| normalize_email(&record.email) == email);
        result.check(taken, ViolationKind::EmailTaken);

        if candidate.is_setting_password() {
            let password = candidate.password.as_deref().unwrap_or_default();
            let length = password.chars().count();

            result.check(is_blank(password), ViolationKind::PasswordBlank);
            result.check(length < PASSWORD_MIN_LENGTH, ViolationKind::PasswordTooShort);
            result.check(length > PASSWORD_MAX_LENGTH, ViolationKind::PasswordTooLong);
            result.check(
                candidate.password != candidate.password_confirmation,
                ViolationKind::ConfirmationMismatch,
            );
        }

        result
    }

    /// Validate and, on success, move the candidate into the save pipeline
    ///
    /// # Returns
    /// * `Ok(ValidatedUser)` - Candidate passed every rule; email is normalized
    /// * `Err(ValidationResult)` - The rules that failed
    pub fn check(
        &self,
        candidate: UserCandidate,
        existing: &[UserRecord],
    ) -> Result<ValidatedUser, ValidationResult> {
        let result = self.validate(&candidate, existing);
        if !result.is_valid() {
            return Err(result);
        }

        let email = normalize_email(&candidate.email);
        let password = match (candidate.password, &candidate.stored) {
            (Some(plaintext), _) => PasswordInput::Plaintext(plaintext),
            (None, Some(stored)) => PasswordInput::Stored(stored.password_digest.clone()),
            // New records always submit a password, or validation fails above
            (None, None) => return Err(ValidationResult::from(ViolationKind::PasswordBlank)),
        };

        Ok(ValidatedUser {
            id: candidate.stored.as_ref().map(|s| s.id.clone()),
            name: candidate.name,
            email,
            is_admin: candidate.is_admin,
            password,
        })
    }
}
