//! Validation rules for the login form.
//!
//! There is exactly one inline rule (password length) plus a derived
//! form-validity check that gates the submit button.

/// Message shown under the password field when it is too short.
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter mais de 3 caracteres";

/// Passwords with fewer characters than this (but at least one) are rejected.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Validates a password, returning the inline error message if any.
///
/// An empty password produces no error here; emptiness is caught by
/// [`is_form_valid`] instead, so an untouched field never shows an error.
/// Lengths are counted in characters, not bytes.
pub fn validate_password(password: &str) -> Option<String> {
    let len = password.chars().count();
    if (1..MIN_PASSWORD_LENGTH).contains(&len) {
        Some(PASSWORD_TOO_SHORT.to_string())
    } else {
        None
    }
}

/// Whether the primary submit action should be reachable.
///
/// True iff both trimmed fields are non-empty and no password error is
/// currently displayed.
pub fn is_form_valid(email: &str, password: &str, password_error: Option<&str>) -> bool {
    !email.trim().is_empty() && !password.trim().is_empty() && password_error.is_none()
}
