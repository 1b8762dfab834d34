#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Password hashing failure in {component} during {operation}: {message}")]
    PasswordHash {
        operation: &'static str,
        component: &'static str,
        message: String,
    },

    #[error("crypto failure in {component} during {operation}: {message}")]
    Other {
        operation: &'static str,
        component: &'static str,
        message: String,
    },
}

impl CryptoError {
    /// argon2's `password_hash::Error` is not `std::error::Error` without extra
    /// features, so it is captured by message
    pub fn password_hash(
        component: &'static str,
        operation: &'static str,
        err: argon2::password_hash::Error,
    ) -> Self {
        Self::PasswordHash {
            component,
            operation,
            message: err.to_string(),
        }
    }

    pub fn other_from_string(
        component: &'static str,
        operation: &'static str,
        error_message: String,
    ) -> Self {
        Self::Other {
            component,
            operation,
            message: error_message,
        }
    }
}
