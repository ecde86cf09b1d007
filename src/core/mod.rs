//! Core domain logic for the login screen: form state, validation,
//! notifications and the stub action handlers

#[cfg(feature = "ssr")]
pub mod config;
pub mod dispatch;
mod form;
mod notification;
pub mod validation;
#[cfg(test)]
mod tests;

pub use form::LoginFields;
pub use notification::{Notification, NotificationSink, Severity};
