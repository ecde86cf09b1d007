//! Transient state behind the login form.

use crate::core::validation::{is_form_valid, validate_password};

/// Field values and the derived password error for the login form.
///
/// Created empty when the form mounts, mutated through the setters on
/// every input event, and discarded on unmount. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
    pub password_error: Option<String>,
}

impl LoginFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the email value.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Replace the password value and recompute the inline error.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = validate_password(&self.password);
    }

    /// Whether the submit button should be enabled.
    pub fn is_valid(&self) -> bool {
        is_form_valid(&self.email, &self.password, self.password_error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::PASSWORD_TOO_SHORT;

    #[test]
    fn test_new_form_is_empty_and_invalid() {
        let fields = LoginFields::new();
        assert_eq!(fields.email, "");
        assert_eq!(fields.password, "");
        assert_eq!(fields.password_error, None);
        assert!(!fields.is_valid());
    }

    #[test]
    fn test_set_password_recomputes_error() {
        let mut fields = LoginFields::new();

        fields.set_password("ab");
        assert_eq!(fields.password_error, Some(PASSWORD_TOO_SHORT.to_string()));

        fields.set_password("abcd");
        assert_eq!(fields.password_error, None);
    }

    #[test]
    fn test_clearing_password_clears_error() {
        let mut fields = LoginFields::new();

        fields.set_password("ab");
        assert!(fields.password_error.is_some());

        // Deleting everything removes the error even though the form
        // stays invalid
        fields.set_password("");
        assert_eq!(fields.password_error, None);
        assert!(!fields.is_valid());
    }

    #[test]
    fn test_valid_credentials_enable_submit() {
        let mut fields = LoginFields::new();
        fields.set_email("a@b.com");
        fields.set_password("abcd");
        assert!(fields.is_valid());
    }

    #[test]
    fn test_short_password_disables_submit() {
        let mut fields = LoginFields::new();
        fields.set_email("a@b.com");
        fields.set_password("ab");
        assert!(!fields.is_valid());
    }

    #[test]
    fn test_email_is_not_validated_on_set() {
        let mut fields = LoginFields::new();
        fields.set_email("definitely not an email");
        fields.set_password("abcd");
        assert!(fields.is_valid());
    }
}
