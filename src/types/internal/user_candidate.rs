use std::fmt;

use super::UserRecord;

/// State carried over from the stored record when a candidate is an update
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct StoredState {
    pub(crate) id: String,
    pub(crate) password_digest: String,
}

/// A user record as submitted for create or update
///
/// `password` and `password_confirmation` are transient: they are consumed by
/// `prepare_for_persistence` and never stored. `None` means the field was not
/// submitted at all, which differs from a blank string.
#[derive(Clone, Default)]
pub struct UserCandidate {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
    pub is_admin: bool,
    pub(crate) stored: Option<StoredState>,
}

impl UserCandidate {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_password(
        mut self,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        self.password = Some(password.into());
        self.password_confirmation = Some(password_confirmation.into());
        self
    }

    pub(crate) fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            password: None,
            password_confirmation: None,
            is_admin: record.is_admin,
            stored: Some(StoredState {
                id: record.id.clone(),
                password_digest: record.password_digest.clone(),
            }),
        }
    }

    /// Id of the record being updated, `None` for a new user
    pub fn id(&self) -> Option<&str> {
        self.stored.as_ref().map(|s| s.id.as_str())
    }

    pub fn is_new_record(&self) -> bool {
        self.stored.is_none()
    }

    /// True when the password rules apply to this candidate
    pub fn is_setting_password(&self) -> bool {
        self.is_new_record() || self.password.is_some() || self.password_confirmation.is_some()
    }
}

impl fmt::Debug for UserCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("UserCandidate")
            .field("id", &self.id())
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("password_confirmation", &redact(&self.password_confirmation))
            .field("is_admin", &self.is_admin)
            .finish()
    }
}
