//! Login form component
//!
//! Collects email and password, revalidates on every keystroke and
//! dispatches the three stub actions through the toast sink.

use leptos::prelude::*;

use crate::core::{LoginFields, dispatch};
use crate::ui::common::{Button, ButtonVariant, FormField, PasswordField};
use crate::ui::icon::GoogleIcon;
use crate::ui::notifications::use_toaster;

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let toaster = use_toaster();

    // Form state, recomputed on every keystroke
    let fields = RwSignal::new(LoginFields::new());

    let email = Signal::derive(move || fields.get().email);
    let password = Signal::derive(move || fields.get().password);
    let password_error = Signal::derive(move || fields.get().password_error);
    let is_valid = Memo::new(move |_| fields.get().is_valid());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch::submit(&fields.get_untracked(), &toaster);
    };

    view! {
        <div class="w-full max-w-md mx-auto bg-theme-card rounded-xl shadow-lg p-6 md:p-8 border border-theme">
            // Header
            <div class="flex flex-col items-center mb-8 text-center">
                <h1 class="text-2xl font-bold text-theme-primary mb-2">"Bem-vindo de volta"</h1>
                <p class="text-sm text-theme-secondary">
                    "Entre com suas credenciais para continuar"
                </p>
            </div>

            <form on:submit=on_submit class="space-y-6">
                // Email field
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="seu@email.com"
                    autocomplete="email"
                    required=true
                    value=email
                    on_input=Callback::new(move |value: String| {
                        fields.update(|f| f.set_email(value));
                    })
                />

                // Password field with inline error
                <PasswordField
                    label="Senha"
                    placeholder="Digite sua senha"
                    value=password
                    on_input=Callback::new(move |value: String| {
                        fields.update(|f| f.set_password(value));
                    })
                    error=password_error
                />

                // Forgot password link
                <div class="flex justify-end">
                    <Button
                        variant=ButtonVariant::Link
                        on_click=Callback::new(move |_| dispatch::forgot_password(&toaster))
                    >
                        "Esqueceu sua senha?"
                    </Button>
                </div>

                // Submit, gated by form validity
                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || !is_valid.get())
                    class="w-full"
                >
                    "Entrar"
                </Button>

                // Divider
                <div class="flex items-center gap-3">
                    <div class="flex-1 border-t border-theme"></div>
                    <span class="text-sm text-theme-tertiary">"ou"</span>
                    <div class="flex-1 border-t border-theme"></div>
                </div>

                // Alternate provider (stub)
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| dispatch::google_login(&toaster))
                    class="w-full"
                >
                    <GoogleIcon class="w-5 h-5 mr-2" />
                    "Continuar com Google"
                </Button>
            </form>
        </div>
    }
}
