// Intermediate states of the save pipeline: validate -> prepare -> persist.
// Constructors are crate-private so each stage can only be reached through the
// one before it.

/// Password material for a validated user
#[derive(Clone)]
pub(crate) enum PasswordInput {
    /// A new plaintext password to hash
    Plaintext(String),
    /// Keep the digest already on the stored record
    Stored(String),
}

/// A candidate that passed validation, with its email normalized
#[derive(Clone)]
pub struct ValidatedUser {
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) is_admin: bool,
    pub(crate) password: PasswordInput,
}

impl ValidatedUser {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A validated user with its digest computed and a fresh remember token,
/// ready to be written. Holds no plaintext.
#[derive(Clone)]
pub struct PreparedUser {
    pub(crate) id: Option<String>,
    pub(crate) name: String,
    pub(crate) email: String,
    pub(crate) password_digest: String,
    /// True when `password_digest` was computed from a submitted password.
    /// Updates leave the stored digest alone otherwise.
    pub(crate) rehashed: bool,
    pub(crate) remember_token: String,
    pub(crate) is_admin: bool,
}

impl PreparedUser {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_digest(&self) -> &str {
        &self.password_digest
    }

    pub fn remember_token(&self) -> &str {
        &self.remember_token
    }

    pub fn is_rehashed(&self) -> bool {
        self.rehashed
    }
}

impl std::fmt::Debug for ValidatedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl std::fmt::Debug for PreparedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedUser")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_digest", &"<redacted>")
            .field("rehashed", &self.rehashed)
            .field("remember_token", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}
