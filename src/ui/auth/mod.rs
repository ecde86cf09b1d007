//! Authentication UI: the login form and its controls.

mod login_form;

pub use login_form::LoginForm;
