//! User-facing notification model.
//!
//! The UI renders these as transient toasts; the action handlers only
//! ever see the [`NotificationSink`] trait.

use serde::{Deserialize, Serialize};

/// Visual severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A transient message shown to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
            // Errors are dismissed manually
            auto_dismiss_ms: None,
        }
    }
}

/// Destination for notifications emitted by the action handlers.
///
/// The toast stack implements this in the UI; tests use a recording
/// double instead, so the handlers never depend on a rendering surface.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_auto_dismisses() {
        let n = Notification::success("title", "message");
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.title, "title");
        assert_eq!(n.message, "message");
        assert!(n.auto_dismiss_ms.is_some());
    }

    #[test]
    fn test_info_auto_dismisses() {
        let n = Notification::info("title", "message");
        assert_eq!(n.severity, Severity::Info);
        assert!(n.auto_dismiss_ms.is_some());
    }

    #[test]
    fn test_error_sticks_until_dismissed() {
        let n = Notification::error("title", "message");
        assert_eq!(n.severity, Severity::Error);
        assert_eq!(n.auto_dismiss_ms, None);
    }
}
