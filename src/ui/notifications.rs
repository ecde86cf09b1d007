//! Toast notifications
//!
//! Renders core [`Notification`]s as transient toasts at the bottom
//! center of the screen. The [`Toaster`] is the app's
//! [`NotificationSink`]: action handlers push into it, the
//! [`ToastStack`] renders whatever is queued.

use crate::core::{Notification, NotificationSink, Severity};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of toasts shown at once; older ones are dropped
const MAX_TOASTS: usize = 5;

/// Queued notification with the id used to dismiss it
#[derive(Clone, Debug)]
pub struct ToastItem {
    pub id: u64,
    pub notification: Notification,
}

/// Reactive toast queue, shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Queue a notification, dropping the oldest once the stack is full
    pub fn push(&self, notification: Notification) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|toasts| {
            toasts.push_back(ToastItem { id, notification });

            while toasts.len() > MAX_TOASTS {
                toasts.pop_front();
            }
        });
    }

    /// Remove a toast by id
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| {
            toasts.retain(|item| item.id != id);
        });
    }

    fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for Toaster {
    fn notify(&self, notification: Notification) {
        self.push(notification);
    }
}

/// Provide the toaster to the application
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// Use the toaster from anywhere in the component tree
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster should be provided")
}

/// Toast container, mounted once at the app root
#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 inset-x-0 z-50 flex flex-col items-center gap-2 px-4 pointer-events-none">
            {move || {
                toaster
                    .toasts()
                    .get()
                    .into_iter()
                    .map(|item| view! { <Toast item=item /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Single toast
#[component]
fn Toast(item: ToastItem) -> impl IntoView {
    let toaster = use_toaster();
    let id = item.id;

    // Auto-dismiss if the notification asks for it
    if let Some(_ms) = item.notification.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                toaster.dismiss(id);
            });
        }
    }

    let (border_class, icon_class, icon_name) = match item.notification.severity {
        Severity::Success => ("border-green-500/30", "text-green-400", icons::CHECK_CIRCLE),
        Severity::Info => ("border-blue-500/30", "text-blue-400", icons::INFO_CIRCLE),
        Severity::Error => ("border-red-500/30", "text-red-400", icons::ALERT_CIRCLE),
    };

    let container_class = format!(
        "w-full max-w-sm flex items-start gap-3 p-4 rounded-lg border bg-theme-card shadow-lg pointer-events-auto {}",
        border_class
    );

    view! {
        <div class=container_class>
            <div class=icon_class>
                <Icon name=icon_name />
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-theme-primary">{item.notification.title.clone()}</h4>
                <p class="text-xs text-theme-secondary mt-0.5">{item.notification.message.clone()}</p>
            </div>
            <button
                class="text-theme-tertiary hover:text-theme-primary transition-colors"
                on:click=move |_| toaster.dismiss(id)
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let _owner = Owner::new_root(None);
        let toaster = Toaster::new();
        toaster.push(Notification::info("a", "b"));
        toaster.push(Notification::info("c", "d"));

        let ids: Vec<u64> = toaster
            .toasts
            .with_untracked(|t| t.iter().map(|item| item.id).collect());
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_stack_is_bounded_dropping_oldest() {
        let _owner = Owner::new_root(None);
        let toaster = Toaster::new();
        for i in 0..(MAX_TOASTS + 2) {
            toaster.push(Notification::info(format!("toast {i}"), "m"));
        }

        assert_eq!(toaster.toasts.with_untracked(|t| t.len()), MAX_TOASTS);
        let first_id = toaster.toasts.with_untracked(|t| t.front().unwrap().id);
        assert_eq!(first_id, 2);
    }

    #[test]
    fn test_dismiss_removes_by_id() {
        let _owner = Owner::new_root(None);
        let toaster = Toaster::new();
        toaster.push(Notification::success("a", "b"));
        toaster.push(Notification::error("c", "d"));

        toaster.dismiss(0);

        let remaining: Vec<u64> = toaster
            .toasts
            .with_untracked(|t| t.iter().map(|item| item.id).collect());
        assert_eq!(remaining, vec![1]);
    }

    #[test]
    fn test_sink_impl_forwards_to_queue() {
        let _owner = Owner::new_root(None);
        let toaster = Toaster::new();
        toaster.notify(Notification::error("x", "y"));

        assert_eq!(toaster.toasts.with_untracked(|t| t.len()), 1);
        let severity = toaster
            .toasts
            .with_untracked(|t| t.front().unwrap().notification.severity);
        assert_eq!(severity, Severity::Error);
    }
}
