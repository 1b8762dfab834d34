use thiserror::Error;

pub mod crypto;
pub mod database;
pub mod user;

pub use crypto::CryptoError;
pub use database::DatabaseError;
pub use user::UserError;

/// Internal error type for store, provider and coordinator operations
///
/// Infrastructure errors (database, crypto) are fatal for the current unit of work.
/// `User` carries the recoverable, user-facing outcomes such as validation failures.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    User(#[from] UserError),
}

impl InternalError {
    pub fn database(operation: &'static str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation { operation, source })
    }

    pub fn crypto(operation: &'static str, message: impl Into<String>) -> InternalError {
        InternalError::Crypto(CryptoError::other_from_string("crypto_provider", operation, message.into()))
    }

    /// The validation report, when this error is a rejected candidate
    pub fn validation(&self) -> Option<&crate::types::internal::ValidationResult> {
        match self {
            InternalError::User(UserError::Invalid(result)) => Some(result),
            _ => None,
        }
    }
}
