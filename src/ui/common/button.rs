use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Link,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// Type-safe button component with variants
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// HTML button type ("button" or "submit")
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler; omitted for submit buttons handled by the form
    #[prop(optional, into)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled, reactive so derived validity can
    /// drive it
    #[prop(optional, into)]
    disabled: Option<Signal<bool>>,
    /// Button content (text or elements)
    children: Children,
    /// Additional CSS classes
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let base_classes = format!("btn-base {}", variant.class());
    let full_classes = if class.is_empty() {
        base_classes
    } else {
        format!("{} {}", base_classes, class)
    };

    view! {
        <button
            type=button_type
            class=full_classes
            disabled=move || disabled.as_ref().is_some_and(|d| d.get())
            on:click=move |_| {
                if let Some(callback) = on_click.as_ref() {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
