//! Application pages: the login screen and the 404 fallback.

mod login;
mod not_found;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
