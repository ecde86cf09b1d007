//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-theme-primary mb-4">"404"</h1>

                <h2 class="text-2xl font-semibold text-theme-primary mb-2">
                    "Página não encontrada"
                </h2>

                <p class="text-theme-secondary mb-8 max-w-md mx-auto">
                    "A página que você procura não existe ou foi movida."
                </p>

                <A
                    href="/"
                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                >
                    "Voltar ao início"
                </A>
            </div>
        </div>
    }
}
