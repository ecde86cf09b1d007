//! Common reusable UI components shared by the form and pages.

pub mod button;
pub mod form;

pub use button::{Button, ButtonVariant};
pub use form::{FormField, PasswordField};
