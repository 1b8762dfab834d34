use std::fmt;

use crate::types::db::user;

use super::UserCandidate;

/// A persisted user
///
/// Only produced by the store, so `password_digest` and `remember_token` are
/// always populated.
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub remember_token: String,
    pub is_admin: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserRecord {
    /// Start an update of this record
    ///
    /// The returned candidate carries no password; setting one re-hashes on save.
    pub fn edit(&self) -> UserCandidate {
        UserCandidate::from_record(self)
    }
}

impl From<user::Model> for UserRecord {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            password_digest: m.password_digest,
            remember_token: m.remember_token,
            is_admin: m.admin,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_digest", &"<redacted>")
            .field("remember_token", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
