use super::UserRecord;

/// Outcome of a sign-in attempt
///
/// An unknown email and a wrong password both produce the same `AuthFailure`,
/// so callers cannot tell the two apart.
pub type AuthResult = Result<UserRecord, AuthFailure>;

/// The single failure value returned by `authenticate`
///
/// Every failure is equal to every other failure and never equal to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, thiserror::Error)]
#[error("Invalid email/password combination")]
pub struct AuthFailure;

impl From<AuthFailure> for bool {
    fn from(_: AuthFailure) -> bool {
        false
    }
}
