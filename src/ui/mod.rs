//! Leptos components for the login screen: page shell, form, toasts,
//! theme context and shared widgets.

pub mod auth;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod theme;

pub use auth::LoginForm;
pub use icon::{GoogleIcon, Icon, icons};
pub use notifications::{ToastStack, Toaster, provide_toaster, use_toaster};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
