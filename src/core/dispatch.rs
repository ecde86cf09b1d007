//! Action handlers behind the login screen controls.
//!
//! All three are stubs: each emits a single notification through the
//! injected sink and performs no backend effect. There is no credential
//! verification, OAuth flow or email dispatch behind them.

use crate::core::form::LoginFields;
use crate::core::notification::{Notification, NotificationSink};

/// Handles the primary "Entrar" action.
///
/// No-op unless the form is valid; the UI additionally disables the
/// submit control in that case.
pub fn submit(fields: &LoginFields, sink: &impl NotificationSink) {
    if !fields.is_valid() {
        return;
    }

    sink.notify(Notification::success(
        "Login realizado com sucesso!",
        "Você foi autenticado e será redirecionado.",
    ));
}

/// Handles "Continuar com Google". Always succeeds.
pub fn google_login(sink: &impl NotificationSink) {
    sink.notify(Notification::success(
        "Login com Google realizado!",
        "Você foi autenticado através do Google.",
    ));
}

/// Handles the "Esqueceu sua senha?" link.
pub fn forgot_password(sink: &impl NotificationSink) {
    sink.notify(Notification::info(
        "Funcionalidade de redefinir senha",
        "Link de recuperação será enviado para seu email.",
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use std::cell::RefCell;

    /// Records every notification instead of rendering it.
    #[derive(Default)]
    struct RecordingSink {
        notifications: RefCell<Vec<Notification>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
    }

    fn valid_fields() -> LoginFields {
        let mut fields = LoginFields::new();
        fields.set_email("a@b.com");
        fields.set_password("abcd");
        fields
    }

    #[test]
    fn test_submit_with_valid_form_emits_one_success() {
        let sink = RecordingSink::default();

        submit(&valid_fields(), &sink);

        let recorded = sink.notifications.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].severity, Severity::Success);
        assert_eq!(recorded[0].title, "Login realizado com sucesso!");
        assert_eq!(recorded[0].message, "Você foi autenticado e será redirecionado.");
    }

    #[test]
    fn test_submit_with_empty_password_is_a_noop() {
        let sink = RecordingSink::default();

        let mut fields = LoginFields::new();
        fields.set_email("a@b.com");
        submit(&fields, &sink);

        assert!(sink.notifications.borrow().is_empty());
    }

    #[test]
    fn test_submit_with_short_password_is_a_noop() {
        let sink = RecordingSink::default();

        let mut fields = LoginFields::new();
        fields.set_email("a@b.com");
        fields.set_password("ab");
        submit(&fields, &sink);

        assert!(sink.notifications.borrow().is_empty());
    }

    #[test]
    fn test_google_login_always_emits_one_success() {
        let sink = RecordingSink::default();

        google_login(&sink);

        let recorded = sink.notifications.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].severity, Severity::Success);
        assert_eq!(recorded[0].title, "Login com Google realizado!");
        assert_eq!(recorded[0].message, "Você foi autenticado através do Google.");
    }

    #[test]
    fn test_forgot_password_always_emits_one_info() {
        let sink = RecordingSink::default();

        forgot_password(&sink);

        let recorded = sink.notifications.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].severity, Severity::Info);
        assert_eq!(recorded[0].title, "Funcionalidade de redefinir senha");
        assert_eq!(recorded[0].message, "Link de recuperação será enviado para seu email.");
    }
}
