use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Whether the field carries the HTML required attribute
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(into, default = String::new())]
    placeholder: String,
    /// Autocomplete hint
    #[prop(optional, into)]
    autocomplete: Option<&'static str>,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <input
                type=input_type
                class="input-base"
                class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError error=error />
        </div>
    }
}

/// Masked input with a visibility toggle
#[component]
pub fn PasswordField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// Placeholder text
    #[prop(into, default = String::new())]
    placeholder: String,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional, into)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let show_password = RwSignal::new(false);

    view! {
        <div class="space-y-1.5">
            <label class="label">{label}</label>
            <div class="relative">
                <input
                    type=move || if show_password.get() { "text" } else { "password" }
                    class="input-base pr-10"
                    class:border-red-500=move || error.as_ref().and_then(|e| e.get()).is_some()
                    placeholder=placeholder
                    autocomplete="current-password"
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                    on:click=move |_| show_password.update(|v| *v = !*v)
                >
                    {move || {
                        if show_password.get() {
                            view! { <Icon name=icons::EYE_OFF /> }.into_any()
                        } else {
                            view! { <Icon name=icons::EYE /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldError error=error />
        </div>
    }
}

/// Inline error row shown under a field
#[component]
fn FieldError(error: Option<Signal<Option<String>>>) -> impl IntoView {
    view! {
        {move || {
            error.as_ref().and_then(|e| e.get()).map(|err| {
                view! {
                    <div class="flex items-center gap-1 text-sm text-theme-error">
                        <Icon name=icons::ALERT_CIRCLE class="w-4 h-4" />
                        <span>{err}</span>
                    </div>
                }
            })
        }}
    }
}
