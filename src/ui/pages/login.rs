//! Login page component
//!
//! The themed shell around the login form: header with brand and theme
//! toggle, centered form, footer. No business logic lives here.

use leptos::prelude::*;

use crate::ui::auth::LoginForm;
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeMode, use_theme_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            // Header
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        // Brand
                        <div class="flex items-center gap-3">
                            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                                <Icon name=icons::LOCK class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-bold text-theme-primary">"Acesso"</span>
                        </div>

                        // Theme toggle
                        <button
                            class="p-2 rounded-lg hover:bg-theme-secondary transition-colors text-theme-secondary"
                            on:click=move |_| theme.toggle()
                            title="Alternar tema"
                        >
                            {move || {
                                if theme.mode.get() == ThemeMode::Dark {
                                    view! { <Icon name=icons::SUN /> }.into_any()
                                } else {
                                    view! { <Icon name=icons::MOON /> }.into_any()
                                }
                            }}
                        </button>
                    </div>
                </div>
            </header>

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <LoginForm />
                </div>
            </main>

            // Footer
            <footer class="py-4 border-t border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-sm text-theme-tertiary">
                        "© 2026 Acesso. Todos os direitos reservados."
                    </p>
                </div>
            </footer>
        </div>
    }
}
