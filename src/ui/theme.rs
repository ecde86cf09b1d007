//! Theme context for dark/light mode
//!
//! Provides:
//! - ThemeMode enum (Dark, Light)
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence
//!
//! The screen defaults to dark, matching the visual design.

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Flip between dark and light, persisting the choice
    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        self.mode.set(next);
        persist_theme(next);
        self.apply_theme_class();
    }

    /// Sync the `dark` class on the document element with the current mode
    pub fn apply_theme_class(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    if let Some(html) = document.document_element() {
                        let class_list = html.class_list();
                        if self.mode.get_untracked() == ThemeMode::Dark {
                            let _ = class_list.add_1("dark");
                        } else {
                            let _ = class_list.remove_1("dark");
                        }
                    }
                }
            }
        }
    }
}

/// Persist theme to localStorage
fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item("acesso-theme", mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item("acesso-theme") {
                    return ThemeMode::from_str(&value);
                }
            }
        }
    }
    ThemeMode::Dark
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(load_persisted_theme());
    let ctx = ThemeContext { mode };

    // Apply the class initially and whenever the mode changes
    #[cfg(not(feature = "ssr"))]
    {
        let ctx_clone = ctx;
        Effect::new(move |_| {
            let _ = ctx_clone.mode.get();
            ctx_clone.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
