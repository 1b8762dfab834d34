use crate::errors::InternalError;
use crate::types::internal::UserRecord;

/// Finds a persisted user by normalized email
///
/// The seam `authenticate` reads through. `UserStore` implements it against the
/// database; tests can supply an in-memory implementation.
#[async_trait::async_trait]
pub trait UserLookup: Send + Sync {
    /// # Returns
    /// * `Ok(Some(UserRecord))` - A record with this email exists
    /// * `Ok(None)` - No such record
    /// * `Err(InternalError)` - The lookup itself failed
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, InternalError>;
}
