use std::collections::BTreeSet;
use std::fmt;

/// Candidate field a violation is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

/// A single failed validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum ViolationKind {
    #[error("Name can't be blank")]
    NameBlank,

    #[error("Name is too long (maximum is 50 characters)")]
    NameTooLong,

    #[error("Email can't be blank")]
    EmailBlank,

    #[error("Email is invalid")]
    EmailInvalid,

    #[error("Email has already been taken")]
    EmailTaken,

    #[error("Password can't be blank")]
    PasswordBlank,

    #[error("Password is too short (minimum is 6 characters)")]
    PasswordTooShort,

    #[error("Password is too long (maximum is 100 characters)")]
    PasswordTooLong,

    #[error("Password confirmation doesn't match Password")]
    ConfirmationMismatch,
}

impl ViolationKind {
    pub fn field(&self) -> Field {
        match self {
            Self::NameBlank | Self::NameTooLong => Field::Name,
            Self::EmailBlank | Self::EmailInvalid | Self::EmailTaken => Field::Email,
            Self::PasswordBlank | Self::PasswordTooShort | Self::PasswordTooLong => Field::Password,
            Self::ConfirmationMismatch => Field::PasswordConfirmation,
        }
    }
}

/// Every rule a candidate failed, in a stable order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: BTreeSet<ViolationKind>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, kind: ViolationKind) {
        self.violations.insert(kind);
    }

    pub(crate) fn check(&mut self, failed: bool, kind: ViolationKind) {
        if failed {
            self.add(kind);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> impl Iterator<Item = ViolationKind> + '_ {
        self.violations.iter().copied()
    }

    pub fn contains(&self, kind: ViolationKind) -> bool {
        self.violations.contains(&kind)
    }

    pub fn for_field(&self, field: Field) -> Vec<ViolationKind> {
        self.violations().filter(|v| v.field() == field).collect()
    }

    /// User-facing messages, one per violation
    pub fn messages(&self) -> Vec<String> {
        self.violations().map(|v| v.to_string()).collect()
    }
}

impl From<ViolationKind> for ValidationResult {
    fn from(kind: ViolationKind) -> Self {
        let mut result = Self::new();
        result.add(kind);
        result
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        assert!(ValidationResult::new().is_valid());
    }

    #[test]
    fn test_violations_are_attributed_to_fields() {
        let mut result = ValidationResult::new();
        result.add(ViolationKind::EmailInvalid);
        result.add(ViolationKind::EmailTaken);
        result.add(ViolationKind::NameBlank);

        assert!(!result.is_valid());
        assert_eq!(
            result.for_field(Field::Email),
            vec![ViolationKind::EmailInvalid, ViolationKind::EmailTaken]
        );
        assert_eq!(result.for_field(Field::Name), vec![ViolationKind::NameBlank]);
        assert!(result.for_field(Field::Password).is_empty());
    }

    #[test]
    fn test_duplicate_violation_reported_once() {
        let mut result = ValidationResult::new();
        result.add(ViolationKind::PasswordBlank);
        result.add(ViolationKind::PasswordBlank);
        assert_eq!(result.violations().count(), 1);
    }

    #[test]
    fn test_display_joins_messages() {
        let mut result = ValidationResult::from(ViolationKind::NameBlank);
        result.add(ViolationKind::ConfirmationMismatch);
        assert_eq!(
            result.to_string(),
            "Name can't be blank, Password confirmation doesn't match Password"
        );
    }
}
