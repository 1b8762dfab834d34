use thiserror::Error;

use crate::types::internal::ValidationResult;

#[derive(Error, Debug)]
pub enum UserError {
    /// The candidate failed one or more validation rules
    #[error("Validation failed: {0}")]
    Invalid(ValidationResult),

    /// The store's uniqueness index rejected the email
    #[error("Email has already been taken: {email}")]
    EmailTaken { email: String },

    #[error("User ID not found: {user_id}")]
    UserIdNotFound { user_id: String },
}
