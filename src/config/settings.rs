use std::fmt;
use std::sync::Arc;

use crate::config::{EnvironmentProvider, SystemEnvironment};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
pub const PASSWORD_PEPPER_MIN_LENGTH: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Required setting '{setting_name}' is missing")]
    Missing { setting_name: &'static str },

    #[error("Setting '{setting_name}' must be at least {expected} characters, got {actual}")]
    TooShort {
        setting_name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Settings for the identity core, loaded from the environment
///
/// | Variable          | Required | Default                       |
/// |-------------------|----------|-------------------------------|
/// | `DATABASE_URL`    | no       | `sqlite://users.db?mode=rwc`  |
/// | `PASSWORD_PEPPER` | yes      | (min 16 characters)           |
pub struct Settings {
    database_url: String,
    password_pepper: String,
}

impl Settings {
    pub fn new(database_url: impl Into<String>, password_pepper: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            password_pepper: password_pepper.into(),
        }
    }

    /// Load settings through the given environment provider
    ///
    /// # Errors
    /// Returns `SettingsError` if the pepper is missing or too short
    pub fn from_env_provider(env: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, SettingsError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let password_pepper = env
            .get_var("PASSWORD_PEPPER")
            .ok_or(SettingsError::Missing { setting_name: "PASSWORD_PEPPER" })?;

        if password_pepper.len() < PASSWORD_PEPPER_MIN_LENGTH {
            return Err(SettingsError::TooShort {
                setting_name: "PASSWORD_PEPPER",
                expected: PASSWORD_PEPPER_MIN_LENGTH,
                actual: password_pepper.len(),
            });
        }

        Ok(Self {
            database_url,
            password_pepper,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Settings {{ database_url: {}, password_pepper: <redacted> }}", self.database_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn env(vars: &[(&str, &str)]) -> Arc<MockEnvironment> {
        let mut provider = MockEnvironment::empty();
        for (key, value) in vars {
            provider = provider.with_var(key, value);
        }
        Arc::new(provider)
    }

    #[test]
    fn test_loads_all_settings() {
        let settings = Settings::from_env_provider(env(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PASSWORD_PEPPER", "valid-pepper-16ch"),
        ]))
        .unwrap();

        assert_eq!(settings.database_url(), "sqlite::memory:");
        assert_eq!(settings.password_pepper(), "valid-pepper-16ch");
    }

    #[test]
    fn test_database_url_defaults() {
        let settings = Settings::from_env_provider(env(&[("PASSWORD_PEPPER", "valid-pepper-16ch")])).unwrap();
        assert_eq!(settings.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn test_missing_pepper() {
        let result = Settings::from_env_provider(env(&[]));
        assert!(matches!(
            result,
            Err(SettingsError::Missing { setting_name: "PASSWORD_PEPPER" })
        ));
    }

    #[test]
    fn test_short_pepper() {
        let result = Settings::from_env_provider(env(&[("PASSWORD_PEPPER", "short")]));
        match result {
            Err(SettingsError::TooShort { expected, actual, .. }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 5);
            }
            other => panic!("Expected TooShort error, got: {:?}", other),
        }
    }

    #[test]
    fn test_debug_and_display_redact_pepper() {
        let settings = Settings::new("sqlite::memory:", "super-secret-pepper-value");

        assert!(!format!("{:?}", settings).contains("super-secret"));
        assert!(!settings.to_string().contains("super-secret"));
    }
}
