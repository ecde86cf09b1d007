//! End-to-end scenarios over the core: keystrokes mutate the form state,
//! validity gates the submit handler, handlers emit notifications.

use crate::core::dispatch;
use crate::core::{LoginFields, Notification, NotificationSink, Severity};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingSink {
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    fn recorded(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

/// Feeds a value into the form one character at a time, the way input
/// events arrive from the field.
fn type_password(fields: &mut LoginFields, value: &str) {
    let mut typed = String::new();
    for c in value.chars() {
        typed.push(c);
        fields.set_password(typed.clone());
    }
}

#[test]
fn test_email_only_keeps_submit_disabled() {
    let mut fields = LoginFields::new();
    fields.set_email("a@b.com");

    assert!(!fields.is_valid());

    let sink = RecordingSink::default();
    dispatch::submit(&fields, &sink);
    assert!(sink.recorded().is_empty());
}

#[test]
fn test_short_password_shows_error_and_keeps_submit_disabled() {
    let mut fields = LoginFields::new();
    fields.set_email("a@b.com");
    type_password(&mut fields, "ab");

    assert_eq!(
        fields.password_error.as_deref(),
        Some("A senha deve ter mais de 3 caracteres")
    );
    assert!(!fields.is_valid());
}

#[test]
fn test_error_appears_on_first_character_and_clears_on_fourth() {
    let mut fields = LoginFields::new();
    fields.set_email("a@b.com");

    fields.set_password("a");
    assert!(fields.password_error.is_some());

    type_password(&mut fields, "abcd");
    assert_eq!(fields.password_error, None);
    assert!(fields.is_valid());
}

#[test]
fn test_valid_submit_emits_exactly_one_success() {
    let mut fields = LoginFields::new();
    fields.set_email("a@b.com");
    type_password(&mut fields, "abcd");

    assert_eq!(fields.password_error, None);
    assert!(fields.is_valid());

    let sink = RecordingSink::default();
    dispatch::submit(&fields, &sink);

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].severity, Severity::Success);
}

#[test]
fn test_alternate_provider_ignores_form_state() {
    let sink = RecordingSink::default();

    // Form left completely empty
    dispatch::google_login(&sink);

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].severity, Severity::Success);
}

#[test]
fn test_forgot_password_ignores_form_state() {
    let sink = RecordingSink::default();

    dispatch::forgot_password(&sink);

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].severity, Severity::Info);
}

#[test]
fn test_each_handler_emits_its_own_tuple() {
    let sink = RecordingSink::default();

    let mut fields = LoginFields::new();
    fields.set_email("a@b.com");
    fields.set_password("abcd");

    dispatch::submit(&fields, &sink);
    dispatch::google_login(&sink);
    dispatch::forgot_password(&sink);

    let recorded = sink.recorded();
    assert_eq!(recorded.len(), 3);
    assert_eq!(recorded[0].title, "Login realizado com sucesso!");
    assert_eq!(recorded[1].title, "Login com Google realizado!");
    assert_eq!(recorded[2].title, "Funcionalidade de redefinir senha");
}
